use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .vpcheckrc.json"));
    let config = test.read_json(".vpcheckrc.json")?;
    assert_eq!(config["contentRoot"], "docs/src");
    assert_eq!(config["publicRoot"], "docs/src/public");
    assert_eq!(config["ignores"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_files(&[(".vpcheckrc.json", "{}")])?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".vpcheckrc.json already exists"));
    assert_eq!(test.read_file(".vpcheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert!(output.status.success());
    let help = stdout(&output);
    for name in ["config-links", "links", "unused-assets", "init"] {
        assert!(help.contains(name), "missing {name} in help");
    }

    Ok(())
}
