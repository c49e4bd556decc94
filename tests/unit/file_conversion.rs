use assert_matches::assert_matches;
use json2md::{convert_file, ConversionConfig, ConversionError, ConversionErrorKind};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_file_to_markdown_success() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("profile.json");
    fs::write(&input, r#"{"name": "Alice", "age": 30}"#).unwrap();

    let conversion = convert_file(&input, None, &ConversionConfig::default()).unwrap();
    assert_eq!(conversion.input, input);
    assert_eq!(conversion.output, tmp.path().join("profile.md"));
    assert_eq!(
        fs::read_to_string(&conversion.output).unwrap(),
        "# name\n\nAlice\n\n# age\n\n```json\n30\n```\n\n"
    );
}

#[test]
fn test_file_to_markdown_invalid_json() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{{name: 'Alice', age: 30}}").unwrap();
    let output = tmp.path().with_extension("md");

    let result = convert_file(tmp.path(), Some(&output), &ConversionConfig::default());
    assert_matches!(result, Err(ConversionError::ParseError(_)));
    assert!(!output.exists());
}

#[test]
fn test_top_level_non_objects_write_nothing() {
    let tmp = tempdir().unwrap();
    let cases = [
        ("array.json", "[{\"a\": 1}]", "array"),
        ("number.json", "3.14", "number"),
        ("string.json", "\"hello\"", "string"),
        ("bool.json", "true", "boolean"),
        ("null.json", "null", "null"),
    ];

    for (name, content, kind) in cases {
        let input = tmp.path().join(name);
        fs::write(&input, content).unwrap();

        let err = convert_file(&input, None, &ConversionConfig::default()).unwrap_err();
        match err {
            ConversionError::Conversion {
                kind: ConversionErrorKind::NotAnObject { found, path },
                ..
            } => {
                assert_eq!(found, kind);
                assert_eq!(path, input);
            }
            other => panic!("{name}: expected shape error, got {other:?}"),
        }
        assert!(!input.with_extension("md").exists(), "{name} produced output");
    }
}

#[test]
fn test_existing_file_left_alone_on_failure() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("broken.json");
    let output = tmp.path().join("broken.md");
    fs::write(&input, "{\"a\": ").unwrap();
    fs::write(&output, "previous").unwrap();

    assert!(convert_file(&input, None, &ConversionConfig::default()).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_unwritable_output_is_io_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in.json");
    fs::write(&input, r#"{"k": "v"}"#).unwrap();

    // A directory cannot be overwritten with a file
    let output = tmp.path().join("taken");
    fs::create_dir(&output).unwrap();

    let err = convert_file(&input, Some(&output), &ConversionConfig::default()).unwrap_err();
    assert_matches!(
        err,
        ConversionError::Conversion {
            kind: ConversionErrorKind::Io { .. },
            ..
        }
    );
    assert!(err.user_message().contains("taken"));
}
