use elvdoc::{
    encode, encode_from_directory, encode_from_paths, pack_and_verify,
    read_assets_from_directory, read_bundle_file, unpack_to_directory, validate, Bundle,
    ElvError, ErrorCode, ValidateLimits,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TEMPLATE: &str = "<html><body>Test Template</body></html>";
const STYLE: &str = "body { margin: 0; }";
const SCRIPT: &str = "console.log('test');";
const CONFIG: &str = "version: 1.0.0\nelvdoc: {name: test}";

fn write_sources(dir: &Path) {
    fs::write(dir.join("template.html"), TEMPLATE).unwrap();
    fs::write(dir.join("style.css"), STYLE).unwrap();
    fs::write(dir.join("function.js"), SCRIPT).unwrap();
    fs::write(dir.join("config.yaml"), CONFIG).unwrap();
}

fn expected() -> Bundle {
    Bundle::new(TEMPLATE, STYLE, SCRIPT, CONFIG)
}

#[test]
fn test_encode_from_strings() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("doc.tar.gz");

    let written = encode(&dest, TEMPLATE, STYLE, SCRIPT, CONFIG).unwrap();
    assert_eq!(written, dest);
    assert!(validate(&written));
    assert_eq!(
        read_bundle_file(&written, &ValidateLimits::default()).unwrap(),
        expected()
    );
}

#[test]
fn test_encode_rewrites_short_extension() {
    let dir = tempdir().unwrap();
    let written = encode(dir.path().join("invoice.elv"), "", "", "", CONFIG).unwrap();

    assert_eq!(written, dir.path().join("invoice.tar.gz"));
    assert!(written.exists());
    assert!(!dir.path().join("invoice.elv").exists());
    assert!(validate(&written));
    // Validation never rewrites: the short name itself is not an archive path.
    assert!(!validate(dir.path().join("invoice.elv")));
}

#[test]
fn test_encode_overwrites_destination() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("doc.tar.gz");
    fs::write(&dest, "stale").unwrap();

    encode(&dest, "", "", "", CONFIG).unwrap();
    assert!(validate(&dest));
}

#[test]
fn test_encode_from_paths() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    let out = tempdir().unwrap();

    let written = encode_from_paths(
        out.path().join("doc.tar.gz"),
        src.path().join("template.html"),
        src.path().join("style.css"),
        src.path().join("function.js"),
        src.path().join("config.yaml"),
    )
    .unwrap();

    assert!(validate(&written));
    assert_eq!(
        read_bundle_file(&written, &ValidateLimits::default()).unwrap(),
        expected()
    );
}

#[test]
fn test_encode_from_directory() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    let out = tempdir().unwrap();

    let written = encode_from_directory(out.path().join("doc.tar.gz"), src.path()).unwrap();
    assert!(validate(&written));
    assert_eq!(
        read_bundle_file(&written, &ValidateLimits::default()).unwrap(),
        expected()
    );
}

#[test]
fn test_missing_source_file_fails_without_output() {
    for missing in ["template.html", "style.css", "function.js", "config.yaml"] {
        let src = tempdir().unwrap();
        write_sources(src.path());
        fs::remove_file(src.path().join(missing)).unwrap();
        let dest = src.path().join("doc.tar.gz");

        let err = encode_from_directory(&dest, src.path()).unwrap_err();
        match &err {
            ElvError::ReadAsset { path, .. } => assert!(path.ends_with(missing)),
            other => panic!("unexpected error for {missing}: {other}"),
        }
        assert!(!dest.exists(), "no archive expected when {missing} is absent");

        let err = encode_from_paths(
            &dest,
            src.path().join("template.html"),
            src.path().join("style.css"),
            src.path().join("function.js"),
            src.path().join("config.yaml"),
        )
        .unwrap_err();
        assert!(err.is_read_asset());
        assert!(!dest.exists());
    }
}

#[test]
fn test_read_assets_from_directory() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    assert_eq!(read_assets_from_directory(src.path()).unwrap(), expected());

    fs::remove_file(src.path().join("template.html")).unwrap();
    assert!(read_assets_from_directory(src.path()).is_err());
}

#[test]
fn test_unwritable_destination() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    let dest = src.path().join("no/such/dir/doc.tar.gz");

    let err = encode_from_directory(&dest, src.path()).unwrap_err();
    assert!(matches!(err, ElvError::CreateArchive { .. }));
}

#[test]
fn test_pack_and_verify() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    let out = tempdir().unwrap();

    let written = pack_and_verify(out.path().join("doc.elv"), src.path()).unwrap();
    assert!(written.ends_with("doc.tar.gz"));
    assert!(validate(&written));
}

#[test]
fn test_pack_and_verify_rejects_bad_config() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    fs::write(src.path().join("config.yaml"), "foo: bar").unwrap();
    let out = tempdir().unwrap();

    let err = pack_and_verify(out.path().join("doc.tar.gz"), src.path()).unwrap_err();
    assert!(err.is_validation());
    match err {
        ElvError::Validation { source, .. } => assert_eq!(source.code, ErrorCode::MissingVersion),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unpack_to_directory() {
    let out = tempdir().unwrap();
    let archive = encode(out.path().join("doc.tar.gz"), TEMPLATE, STYLE, SCRIPT, CONFIG).unwrap();
    let dest = out.path().join("unpacked");

    let bundle = unpack_to_directory(&archive, &dest).unwrap();
    assert_eq!(bundle, expected());
    assert_eq!(fs::read_to_string(dest.join("function.js")).unwrap(), SCRIPT);
    assert_eq!(read_assets_from_directory(&dest).unwrap(), expected());
}

#[test]
fn test_non_utf8_template_roundtrips_byte_for_byte() {
    let src = tempdir().unwrap();
    write_sources(src.path());
    let latin1 = b"<p>caf\xe9</p>";
    fs::write(src.path().join("template.html"), latin1).unwrap();
    let out = tempdir().unwrap();

    let written = encode_from_paths(
        out.path().join("doc.tar.gz"),
        src.path().join("template.html"),
        src.path().join("style.css"),
        src.path().join("function.js"),
        src.path().join("config.yaml"),
    )
    .unwrap();
    assert!(validate(&written));

    let dest = out.path().join("unpacked");
    let bundle = unpack_to_directory(&written, &dest).unwrap();
    assert_eq!(bundle.template, latin1);
    assert_eq!(fs::read(dest.join("template.html")).unwrap(), latin1);
}
