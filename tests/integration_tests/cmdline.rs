use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::fs;
use std::io::Write;
use svg2modelica::cli::{run, Config};
use tempfile::NamedTempFile;

const INPUT: &str = r#"<svg width="10" height="10"><rect width="5" height="5"/></svg>"#;

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--model-name");
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .args(["-m", "FromStdin"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("non-UTF8");
    assert!(output.starts_with("model FromStdin\n"));
    assert_contains!(output, "Rectangle(");
}

#[test]
fn test_cmdline_failure() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--strict")
        .write_stdin(r#"<svg width="10" height="10"><image/></svg>"#)
        .assert()
        .failure()
        .stdout("");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--text-extent", "wide"]).assert().failure().code(2);
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, "{INPUT}").expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {} --model-name Written -n",
        crate_name!(),
        infile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");

    let output = fs::read_to_string(outfile.path()).expect("output should be readable");
    assert!(output.starts_with("model Written\n"));
    assert_contains!(output, "extent= {{-100,-100},{100,100}}");
    assert!(output.ends_with("end Written;\n"));
}

#[test]
fn test_cmdline_same_file() {
    let infile = NamedTempFile::new().expect("could not create tmpfile");
    let path = infile.path().to_str().unwrap();
    let config = Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!()));
    assert!(config.is_err());
}
