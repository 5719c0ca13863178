use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const MANPAGE: &str = r#".TH "FLUXBOX" "1"
.SH "NAME"
fluxbox \- a window manager
.SH "RESOURCES"
.PP
\fBsession\&.screen0\&.{focusModel|followModel}\fR: \fIString\fR
.RS 4
Focus behaviour.
.RE
\fBsession\&.screen0\&.workspaces\fR: \fIinteger\fR
\fBsession\&.screen0\&.rowPlacementDirection\fR: \fBLeftToRight\fR|\fBRightToLeft\fR
\fBsession\&.menuFile\fR: \fIfilename\fR
.SH "ENVIRONMENT"
\fBsession\&.notAResource\fR: \fIinteger\fR
"#;

const FBWL_RESOURCES_C: &str = r#"
static const struct fbwl_resource_entry entries[] = {
    {.key = "session.screen0.workspaces", .value = ws_buf},
    {.key = "session.menuFile", .value = server->menu_file},
    {.key = "session.Titlebar.Left", .value = ""},
};
"#;

const TOOLBAR_CC: &str = r#"
void Toolbar::loadButton(const std::string &name) {
    std::string label = screen().name() + ".toolbar." + name + ".label";
    std::string cmds = screen().name() + ".toolbar." + name + ".commands";
}
"#;

fn write_project(test: &CliTest) -> Result<()> {
    test.write_file("doc/fluxbox.1", MANPAGE)?;
    test.write_file("src/wayland/fbwl_resources.c", FBWL_RESOURCES_C)?;
    test.write_file("src/Toolbar.cc", TOOLBAR_CC)?;
    test.write_file(
        "src/ScreenGeometry.cc",
        "new StrutResource(rm, name() + \".struts.\" + ai, 0);\n",
    )?;
    test.write_file("src/tests/Fixture.cc", "\"session.fixtureOnly\"\n")?;
    Ok(())
}

const EXPECTED_TSV: &str = "key	type	scope	source
session.configVersion	integer	global	code
session.menuFile	filename	global	doc+code
session.screenN.focusModel	String	screen	doc
session.screenN.followModel	String	screen	doc
session.screenN.rowPlacementDirection	enum	screen	doc
session.screenN.struts.<ai>	unknown	screen	code
session.screenN.toolbar.button.<name>.commands	string	screen	code
session.screenN.toolbar.button.<name>.label	string	screen	code
session.screenN.workspaces	integer	screen	doc+code
";

#[test]
fn test_extract_to_default_path() -> Result<()> {
    let test = CliTest::new()?;
    write_project(&test)?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Wrote 9 resources to doc/fluxbox-init-resources.tsv (doc: 3, code: 4, doc+code: 2)
    ");

    assert_eq!(test.read_file("doc/fluxbox-init-resources.tsv")?, EXPECTED_TSV);

    Ok(())
}

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    write_project(&test)?;

    assert_cmd_snapshot!(test.extract_command().args(["--out", "-"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    key	type	scope	source
    session.configVersion	integer	global	code
    session.menuFile	filename	global	doc+code
    session.screenN.focusModel	String	screen	doc
    session.screenN.followModel	String	screen	doc
    session.screenN.rowPlacementDirection	enum	screen	doc
    session.screenN.struts.<ai>	unknown	screen	code
    session.screenN.toolbar.button.<name>.commands	string	screen	code
    session.screenN.toolbar.button.<name>.label	string	screen	code
    session.screenN.workspaces	integer	screen	doc+code

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_verbose_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    write_project(&test)?;
    test.write_file(".fbinitrc.json", r#"{ "out": "-" }"#)?;

    let output = test.extract_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_TSV);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("note: Using config"));
    assert!(stderr.contains(
        "✓ Wrote 9 resources to stdout (doc: 3, code: 4, doc+code: 2)\n  5 documented, 5 referenced in 3 source files, 3 supplemental\n"
    ));

    Ok(())
}

#[test]
fn test_extract_is_reproducible() -> Result<()> {
    let test = CliTest::new()?;
    write_project(&test)?;

    let first = test.extract_command().args(["--out", "-"]).output()?;
    let second = test.extract_command().args(["--out", "-"]).output()?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_extract_json() -> Result<()> {
    let test = CliTest::with_file("src/Toolbar.cc", TOOLBAR_CC)?;

    assert_cmd_snapshot!(test.extract_command().args(["--out", "-", "--format", "json"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    [
      {
        "key": "session.configVersion",
        "type": "integer",
        "scope": "global",
        "source": "code"
      },
      {
        "key": "session.screenN.toolbar.button.<name>.commands",
        "type": "string",
        "scope": "screen",
        "source": "code"
      },
      {
        "key": "session.screenN.toolbar.button.<name>.label",
        "type": "string",
        "scope": "screen",
        "source": "code"
      }
    ]

    ----- stderr -----
    warning: man page not found, table has no documented resources (use -v for details)
    "#);

    Ok(())
}

#[test]
fn test_missing_manpage_is_not_fatal() -> Result<()> {
    let test = CliTest::with_file("src/Toolbar.cc", TOOLBAR_CC)?;

    assert_cmd_snapshot!(test.extract_command().args(["--out", "-"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    key	type	scope	source
    session.configVersion	integer	global	code
    session.screenN.toolbar.button.<name>.commands	string	screen	code
    session.screenN.toolbar.button.<name>.label	string	screen	code

    ----- stderr -----
    warning: man page not found, table has no documented resources (use -v for details)
    ");

    Ok(())
}

#[test]
fn test_cli_paths_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fbinitrc.json",
        r#"{ "manpage": "missing.1", "srcRoot": "missing", "out": "-" }"#,
    )?;
    test.write_file("man/fluxbox.1", MANPAGE)?;
    test.write_file("compositor/Toolbar.cc", TOOLBAR_CC)?;

    assert_cmd_snapshot!(
        test.extract_command()
            .args(["--manpage", "man/fluxbox.1", "--src-root", "compositor"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    key	type	scope	source
    session.configVersion	integer	global	code
    session.menuFile	filename	global	doc
    session.screenN.focusModel	String	screen	doc
    session.screenN.followModel	String	screen	doc
    session.screenN.rowPlacementDirection	enum	screen	doc
    session.screenN.toolbar.button.<name>.commands	string	screen	code
    session.screenN.toolbar.button.<name>.label	string	screen	code
    session.screenN.workspaces	integer	screen	doc

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_config_extra_resources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fbinitrc.json",
        r#"{
            "out": "-",
            "extraResources": { "session.screen0.slit.autoHide": "boolean" }
        }"#,
    )?;
    test.write_file("src/Slit.cc", "scrname + \".slit.autoHide\"\n")?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    key	type	scope	source
    session.configVersion	integer	global	code
    session.screenN.slit.autoHide	boolean	screen	code
    session.screenN.toolbar.button.<name>.commands	string	screen	code
    session.screenN.toolbar.button.<name>.label	string	screen	code

    ----- stderr -----
    warning: man page not found, table has no documented resources (use -v for details)
    ");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".fbinitrc.json", r#"{ "ignores": ["["] }"#)?;

    assert_cmd_snapshot!(test.extract_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[": Pattern syntax error near position 0: invalid range pattern
    "#);

    Ok(())
}

#[test]
fn test_unwritable_output_is_fatal() -> Result<()> {
    let test = CliTest::with_file("blocked", "")?;

    assert_cmd_snapshot!(test.extract_command().args(["--out", "blocked/table.tsv"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to create directory: blocked: File exists (os error 17)
    ");

    assert!(test.root().join("blocked").is_file());

    Ok(())
}
