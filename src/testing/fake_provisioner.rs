use std::sync::Mutex;

use crate::domain::{AppError, ModuleOutputs, TestConfiguration};
use crate::ports::ProvisionerPort;

/// In-memory provisioner recording every call in order.
#[derive(Default)]
pub struct FakeProvisioner {
    pub calls: Mutex<Vec<&'static str>>,
    pub applied_configs: Mutex<Vec<TestConfiguration>>,
    pub outputs: Mutex<ModuleOutputs>,
    pub apply_error: Mutex<Option<String>>,
    pub output_error: Mutex<Option<String>>,
    pub destroy_error: Mutex<Option<String>>,
}

impl FakeProvisioner {
    pub fn new(outputs: ModuleOutputs) -> Self {
        Self { outputs: Mutex::new(outputs), ..Self::default() }
    }

    pub fn fail_apply(&self, message: &str) {
        *self.apply_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_output(&self, message: &str) {
        *self.output_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_destroy(&self, message: &str) {
        *self.destroy_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }
}

impl ProvisionerPort for FakeProvisioner {
    fn init_and_apply(&self, config: &TestConfiguration) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("apply");
        self.applied_configs.lock().unwrap().push(config.clone());
        match self.apply_error.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::ApplyFailed(message.clone())),
            None => Ok(()),
        }
    }

    fn output_all(&self, _config: &TestConfiguration) -> Result<ModuleOutputs, AppError> {
        self.calls.lock().unwrap().push("output");
        match self.output_error.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::ExternalToolError {
                tool: "terraform output".into(),
                error: message.clone(),
            }),
            None => Ok(self.outputs.lock().unwrap().clone()),
        }
    }

    fn destroy(&self, _config: &TestConfiguration) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("destroy");
        match self.destroy_error.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::DestroyFailed(message.clone())),
            None => Ok(()),
        }
    }
}
