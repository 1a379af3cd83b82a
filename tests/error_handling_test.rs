use keycheck::config::EnvFile;
use keycheck::KeycheckError;
use std::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_file_error_names_path_and_keeps_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.env");
    fs::write(&path, "GOOD=1\nTHIS IS NOT VALID\n").unwrap();

    let err = EnvFile::load(&path).unwrap_err();
    let KeycheckError::EnvFile { path: reported, .. } = &err;
    assert_eq!(reported, &path);
    assert!(err.to_string().contains("broken.env"));
    assert!(err.source().is_some());
}

#[test]
fn test_env_file_error_debug_names_variant() {
    let err = KeycheckError::EnvFile {
        path: "config/.env".into(),
        source: dotenvy::Error::LineParse("KEY=\"oops".to_string(), 4),
    };
    assert!(format!("{:?}", err).contains("EnvFile"));
}
