pub mod error;
pub mod keys;
pub mod store;

use error::BuildParameterError;

/// Read access to build parameters.
///
/// Implementors only provide [`ParameterLookup::get_parameter_value`]; the typed accessors are
/// plain lookups of the well known agent [`keys`].
pub trait ParameterLookup {
    fn get_parameter_value(&self, key: &str) -> Result<&str, BuildParameterError>;

    fn agent_home_dir(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::AGENT_HOME_DIR)
    }

    fn agent_name(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::AGENT_NAME)
    }

    fn agent_own_port(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::AGENT_OWN_PORT)
    }

    fn agent_work_dir(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::AGENT_WORK_DIR)
    }

    fn build_number(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_NUMBER)
    }

    fn teamcity_version(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::TEAMCITY_VERSION)
    }

    fn build_id(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_ID)
    }

    fn build_checkout_dir(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_CHECKOUT_DIR)
    }

    fn build_temp_dir(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_TEMP_DIR)
    }

    fn build_working_dir(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_WORKING_DIR)
    }

    fn build_conf_name(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_CONF_NAME)
    }

    fn build_type_id(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::BUILD_TYPE_ID)
    }

    fn project_name(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::PROJECT_NAME)
    }

    fn changed_files_file(&self) -> Result<&str, BuildParameterError> {
        self.get_parameter_value(keys::CHANGED_FILES_FILE)
    }
}
