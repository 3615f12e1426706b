mod helper;

use helper::Workspace;
use rstest::rstest;
use version_bump_guard::config::{CheckConfig, FilesConfig};
use version_bump_guard::version::checker::{CheckReport, ConsistencyChecker};
use version_bump_guard::version::error::CheckError;
use version_bump_guard::version::revision::FsRevision;
use version_bump_guard::version::semver::VersionValue;

fn run(workspace: &Workspace, config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let checker = ConsistencyChecker::new(config).unwrap();
    let current = FsRevision::new(workspace.current_dir(), &config.files);
    let master = FsRevision::new(&workspace.master_dir(), &config.files);
    checker.check(&current, &master)
}

#[test]
fn bumped_version_passes() {
    let workspace = Workspace::new();
    workspace
        .current("2.1.0", "2.1.0", "2.1.0")
        .master("2.0.0", "2.0.0", "2.0.0");

    let report = run(&workspace, &CheckConfig::default()).unwrap();

    assert_eq!(report.current, VersionValue::new(2, 1, 0));
    assert_eq!(report.master, VersionValue::new(2, 0, 0));
    assert_eq!(
        report.to_string(),
        "current version 2.1.0 is greater than master 2.0.0, all is good"
    );
}

#[test]
fn unchanged_version_is_rejected() {
    let workspace = Workspace::new();
    workspace
        .current("2.0.0", "2.0.0", "2.0.0")
        .master("2.0.0", "2.0.0", "2.0.0");

    let err = run(&workspace, &CheckConfig::default()).unwrap_err();

    assert!(matches!(err, CheckError::VersionNotIncremented { .. }));
    assert_eq!(
        err.to_string(),
        "current properties file version 2.0.0 must be greater than master 2.0.0"
    );
}

#[test]
fn inconsistent_readme_is_rejected() {
    let workspace = Workspace::new();
    workspace
        .current("2.1.0", "2.1.0", "2.0.9")
        .master("2.0.0", "2.0.0", "2.0.0");

    let err = run(&workspace, &CheckConfig::default()).unwrap_err();

    assert!(matches!(err, CheckError::InconsistentDeclaration { .. }));
}

#[test]
fn readme_lagging_behind_properties_is_rejected() {
    let workspace = Workspace::new();
    workspace
        .current("2.1.0", "2.0.0", "2.0.0")
        .master("2.0.0", "2.0.0", "2.0.0");

    let err = run(&workspace, &CheckConfig::default()).unwrap_err();

    assert!(matches!(err, CheckError::CrossFileMismatch { .. }));
}

#[rstest]
#[case("2.0.0", "1.9.0", "readme maven")]
#[case("1.9.0", "2.0.0", "readme gradle")]
fn master_readme_ahead_of_current_is_rejected(
    #[case] master_maven: &str,
    #[case] master_gradle: &str,
    #[case] expected_subject: &str,
) {
    // Master README already declares the version the current branch ships.
    let workspace = Workspace::new();
    workspace
        .current("2.0.0", "2.0.0", "2.0.0")
        .master("1.9.0", master_maven, master_gradle);

    let err = run(&workspace, &CheckConfig::default()).unwrap_err();

    assert!(
        matches!(err, CheckError::VersionNotIncremented { subject, .. } if subject == expected_subject),
        "unexpected error: {err:?}"
    );
}

#[test]
fn missing_master_checkout_is_reported() {
    let workspace = Workspace::new();
    workspace.current("2.1.0", "2.1.0", "2.1.0");

    let err = run(&workspace, &CheckConfig::default()).unwrap_err();

    let expected = workspace.master_dir().join("gradle.properties");
    assert!(
        matches!(err, CheckError::Io { ref path, .. } if *path == expected),
        "unexpected error: {err:?}"
    );
}

#[test]
fn custom_file_names_are_used() {
    let workspace = Workspace::new();
    workspace
        .write_current("build.properties", &helper::properties("0.2.0"))
        .write_current("DOCS.md", &helper::readme("0.2.0", "0.2.0"))
        .write_master("build.properties", &helper::properties("0.1.5"))
        .write_master("DOCS.md", &helper::readme("0.1.5", "0.1.5"));
    let config = CheckConfig {
        files: FilesConfig {
            properties: "build.properties".into(),
            readme: "DOCS.md".into(),
        },
        ..CheckConfig::default()
    };

    let report = run(&workspace, &config).unwrap();

    assert_eq!(report.current, VersionValue::new(0, 2, 0));
}
