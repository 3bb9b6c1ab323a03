use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

const INTRO: (&str, &str) = ("docs/src/guide/intro.md", "# Intro\n");

#[test]
fn test_reports_missing_route() -> Result<()> {
    let test = CliTest::with_files(&[
        INTRO,
        (
            "docs/.vitepress/sidebar.js",
            r#"export default {
  "/guide/": [
    {
      text: "Guide",
      items: [
        { text: "Intro", link: '/guide/intro' },
        { text: "Missing", link: '/missing/page' },
      ],
    },
  ],
};
"#,
        ),
        (
            "docs/.vitepress/nav.js",
            r#"export default [
  { text: "Home", link: "/" },
  { text: "Intro", link: "/guide/intro.md" },
];
"#,
        ),
    ])?;

    let output = run(test.config_links_command())?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "wrote: config-broken-links.json (broken=1)\n"
    );
    assert_snapshot!(test.read_file("config-broken-links.json")?, @r#"
    {
      "content_root": "docs/src",
      "routes": 4,
      "broken": 1,
      "items": [
        {
          "route": "/missing/page",
          "candidates": [
            "missing/page.md",
            "missing/page/index.md"
          ]
        }
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_all_links_resolve() -> Result<()> {
    let test = CliTest::with_files(&[
        INTRO,
        ("docs/src/vue/index.md", "# Vue\n"),
        (
            "docs/.vitepress/sidebar.js",
            "export default { '/vue/': [{ link: '/vue/index.md' }, { link: '/vue/' }] };\n",
        ),
        (
            "docs/.vitepress/nav.js",
            "export default [{ link: '/guide/intro' }, { link: 'https://github.com' }];\n",
        ),
    ])?;

    let output = run(test.config_links_command())?;

    assert!(output.status.success());
    let report = test.read_json("config-broken-links.json")?;
    assert_eq!(report["routes"], 3);
    assert_eq!(report["broken"], 0);
    assert_eq!(report["items"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_custom_paths_and_output() -> Result<()> {
    let test = CliTest::with_files(&[
        ("site/content/index.md", "# Home\n"),
        ("site/config/side.js", "{ link: '/index' }\n"),
        ("site/config/top.js", "{ link: '/absent' }\n"),
    ])?;

    let mut cmd = test.config_links_command();
    cmd.args([
        "--content-root",
        "site/content",
        "--sidebar",
        "site/config/side.js",
        "--nav",
        "site/config/top.js",
        "--out",
        "reports/config.json",
    ]);
    let output = run(cmd)?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "wrote: reports/config.json (broken=1)\n");
    let report = test.read_json("reports/config.json")?;
    assert_eq!(report["content_root"], "site/content");
    assert_eq!(report["items"][0]["route"], "/absent");

    Ok(())
}

#[test]
fn test_config_file_supplies_paths() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".vpcheckrc.json",
            r#"{ "contentRoot": "content", "sidebar": "sidebar.js", "nav": "nav.js" }"#,
        ),
        ("content/a.md", ""),
        ("sidebar.js", "{ link: '/a' }"),
        ("nav.js", "{ link: '/b' }"),
    ])?;

    let output = run(test.config_links_command())?;

    assert!(output.status.success());
    let report = test.read_json("config-broken-links.json")?;
    assert_eq!(report["content_root"], "content");
    assert_eq!(report["broken"], 1);
    assert_eq!(report["items"][0]["route"], "/b");

    Ok(())
}

#[test]
fn test_missing_sidebar_is_fatal() -> Result<()> {
    let test = CliTest::with_files(&[INTRO, ("docs/.vitepress/nav.js", "[]")])?;

    let output = run(test.config_links_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read link source"));
    assert!(!test.root().join("config-broken-links.json").exists());

    Ok(())
}

#[test]
fn test_missing_content_root_is_fatal() -> Result<()> {
    let test = CliTest::with_files(&[
        ("docs/.vitepress/sidebar.js", "{ link: '/a' }"),
        ("docs/.vitepress/nav.js", "[]"),
    ])?;

    let output = run(test.config_links_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Content root does not exist"));

    Ok(())
}

#[test]
fn test_reruns_are_byte_identical() -> Result<()> {
    let test = CliTest::with_files(&[
        INTRO,
        (
            "docs/.vitepress/sidebar.js",
            "{ link: '/z' }, { link: '/guide/intro' }, { link: '/a' }",
        ),
        ("docs/.vitepress/nav.js", "{ link: '/m' }"),
    ])?;

    assert!(run(test.config_links_command())?.status.success());
    let first = test.read_file("config-broken-links.json")?;
    assert!(run(test.config_links_command())?.status.success());
    let second = test.read_file("config-broken-links.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_verbose_lists_findings_on_stderr() -> Result<()> {
    let test = CliTest::with_files(&[
        INTRO,
        ("docs/.vitepress/sidebar.js", "{ link: '/missing/page' }"),
        ("docs/.vitepress/nav.js", "[]"),
    ])?;

    let mut cmd = test.config_links_command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "wrote: config-broken-links.json (broken=1)\n"
    );
    let err = stderr(&output);
    assert!(err.contains("broken config link \"/missing/page\""));
    assert!(err.contains("tried missing/page.md, missing/page/index.md"));
    assert!(err.contains("--> docs/.vitepress/sidebar.js\n"));
    assert!(!err.contains("nav.js"));

    Ok(())
}
