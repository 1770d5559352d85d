use measure::config::Config;
use measure::convert::{
    convert, convert_expression, format_result, paired_unit, parse_number, parse_unit, unit_name,
    ConvertError, Unit,
};
use measure::records::{IssueFilter, IssueService, IssueUpdate, JsonFileStore, NewIssue};

#[test]
fn reference_inputs() {
    assert_eq!(parse_number("32L"), Ok(32.0));
    assert_eq!(parse_number("3.1mi"), Ok(3.1));
    assert_eq!(parse_number("1/2km"), Ok(0.5));
    assert!((parse_number("5.4/3lbs").unwrap() - 1.8).abs() < 1e-9);
    assert_eq!(
        parse_number("3/2/3kg").unwrap_err().to_string(),
        "invalid number"
    );
    assert_eq!(parse_number("kg"), Ok(1.0));
    assert_eq!(parse_unit("32g").unwrap_err().to_string(), "invalid unit");
}

#[test]
fn reference_conversions() {
    let cases = [
        (Unit::Gal, 18.9271),
        (Unit::L, 1.32086),
        (Unit::Mi, 8.0467),
        (Unit::Km, 3.10686),
        (Unit::Lbs, 2.26796),
        (Unit::Kg, 11.02312),
    ];
    for (unit, expected) in cases {
        let actual = convert(5.0, unit);
        assert!(
            (actual - expected).abs() < 0.1,
            "5 {} -> expected ~{}, got {}",
            unit,
            expected,
            actual
        );
        // rounded to at most 5 decimals
        assert!(((actual * 1e5).round() - actual * 1e5).abs() < 1e-6);
    }
}

#[test]
fn every_unit_round_trips() {
    for unit in Unit::ALL {
        assert_eq!(paired_unit(paired_unit(unit)), unit);
        assert!(!unit_name(unit).is_empty());

        let mut value = 0.25;
        while value < 10_000.0 {
            let back = convert(convert(value, unit), paired_unit(unit));
            assert!((back - value).abs() < 1e-4, "{} {} came back as {}", value, unit, back);
            value *= 3.7;
        }
    }
}

#[test]
fn formatted_sentence() {
    assert_eq!(
        format_result(5.0, Unit::Gal, 18.9271, Unit::L),
        "5 gallons converts to 18.9271 liters"
    );

    let conversion = convert_expression("1/2km").unwrap();
    assert_eq!(conversion.string, "0.5 kilometers converts to 0.31069 miles");

    let json = serde_json::to_value(&conversion).unwrap();
    assert_eq!(json["initNum"], 0.5);
    assert_eq!(json["initUnit"], "km");
    assert_eq!(json["returnNum"], 0.31069);
    assert_eq!(json["returnUnit"], "mi");
}

#[test]
fn invalid_expressions() {
    assert_eq!(convert_expression("1/0gal"), Err(ConvertError::NotANumber));
    assert_eq!(convert_expression("12"), Err(ConvertError::InvalidUnit));
    assert_eq!(
        convert_expression("3/7.2/4kilomegagram")
            .unwrap_err()
            .to_string(),
        "invalid number and unit"
    );
}

#[test]
fn issue_lifecycle_on_disk() {
    let path = std::env::temp_dir().join(format!(
        "measure-integration-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let id = {
        let mut service = IssueService::new(JsonFileStore::open(&path).unwrap());
        let created = service.create(
            "apitest",
            NewIssue {
                issue_title: "Convert rounding".to_string(),
                issue_text: "Check five decimals".to_string(),
                created_by: "qa".to_string(),
                ..Default::default()
            },
        );
        created["_id"].as_str().unwrap().to_string()
    };

    // reopen: the record must have been persisted
    let mut service = IssueService::new(JsonFileStore::open(&path).unwrap());
    let listed = service.list("apitest", &IssueFilter::from_query("created_by=qa"));
    assert_eq!(listed[0]["_id"], id.as_str());

    let updated = service.update(
        "apitest",
        &IssueUpdate {
            id: Some(id.clone()),
            open: Some(false),
            ..Default::default()
        },
    );
    assert_eq!(updated["result"], "successfully updated");

    let deleted = service.delete("apitest", &id);
    assert_eq!(deleted["result"], "successfully deleted");
    assert!(service
        .list("apitest", &IssueFilter::default())
        .as_array()
        .unwrap()
        .is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_points_at_store() {
    let config = Config::load_from_str("[store]\npath = \"tracker.json\"\n").unwrap();
    assert_eq!(config.store.path, std::path::PathBuf::from("tracker.json"));
}
