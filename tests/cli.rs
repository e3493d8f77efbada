use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const BIN: &str = "teamcity-build-params";
const PROPERTIES_ENV: &str = "TEAMCITY_BUILD_PROPERTIES_FILE";

fn agent_properties() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/teamcity.build.properties")
}

fn build_params() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.env_remove(PROPERTIES_ENV);
    Ok(cmd)
}

#[test]
fn get_prints_unescaped_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = build_params()?;
    cmd.arg("--properties-file")
        .arg(agent_properties())
        .arg("get")
        .arg("agent.work.dir");
    cmd.assert()
        .success()
        .stdout(predicate::eq("C:\\BuildAgent\\work\n"));

    Ok(())
}

#[test]
fn properties_file_is_taken_from_agent_env() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = build_params()?;
    cmd.env(PROPERTIES_ENV, agent_properties())
        .arg("get")
        .arg("agent.name");
    cmd.assert().success().stdout(predicate::eq("BUILDS8\n"));

    Ok(())
}

#[test]
fn get_missing_parameter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = build_params()?;
    cmd.arg("-f")
        .arg(agent_properties())
        .arg("get")
        .arg("no.such.parameter");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parameter `no.such.parameter` is not defined"));

    Ok(())
}

#[test]
fn set_reports_service_message() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("teamcity.build.properties");
    file.write_str("#TeamCity build properties without 'system.' prefix\nbuild.number=4\n")?;

    let mut cmd = build_params()?;
    cmd.arg("-f")
        .arg(file.path())
        .arg("set")
        .arg("build.number")
        .arg("4 [patched]");
    cmd.assert().success().stdout(predicate::eq(
        "##teamcity[setParameter name='build.number' value='4 |[patched|]']\n",
    ));

    Ok(())
}

#[test]
fn set_with_missing_file_still_reports() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    let mut cmd = build_params()?;
    cmd.arg("-f")
        .arg(dir.path().join("not-written-yet.properties"))
        .arg("set")
        .arg("param1")
        .arg("newValue");
    cmd.assert().success().stdout(predicate::str::contains(
        "##teamcity[setParameter name='param1' value='newValue']",
    ));

    Ok(())
}

#[test]
fn set_standalone_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = build_params()?;
    cmd.arg("set").arg("param1").arg("newValue");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "cannot set build parameter `param1` outside a TeamCity build",
        ));

    Ok(())
}

#[test]
fn list_prints_sorted_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("teamcity.build.properties");
    file.write_str("agent.own.port=9090\nagent.name=BUILDS8\nagent.home.dir=C\\:\\\\BuildAgent\n")?;

    let mut cmd = build_params()?;
    cmd.arg("-f").arg(file.path()).arg("list");
    cmd.assert().success().stdout(predicate::eq(
        "agent.home.dir=C:\\BuildAgent\nagent.name=BUILDS8\nagent.own.port=9090\n",
    ));

    Ok(())
}
