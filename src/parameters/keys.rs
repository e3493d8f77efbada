//! Property names written by the build agent.

pub const AGENT_HOME_DIR: &str = "agent.home.dir";
pub const AGENT_NAME: &str = "agent.name";
pub const AGENT_OWN_PORT: &str = "agent.own.port";
pub const AGENT_WORK_DIR: &str = "agent.work.dir";
pub const BUILD_NUMBER: &str = "build.number";

pub const TEAMCITY_VERSION: &str = "teamcity.version";
pub const BUILD_ID: &str = "teamcity.build.id";
pub const BUILD_CHECKOUT_DIR: &str = "teamcity.build.checkoutDir";
pub const BUILD_TEMP_DIR: &str = "teamcity.build.tempDir";
pub const BUILD_WORKING_DIR: &str = "teamcity.build.workingDir";
pub const BUILD_CONF_NAME: &str = "teamcity.buildConfName";
pub const BUILD_TYPE_ID: &str = "teamcity.buildType.id";
pub const PROJECT_NAME: &str = "teamcity.projectName";
pub const CHANGED_FILES_FILE: &str = "teamcity.build.changedFiles.file";
