//! Builds the per-run test configuration.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::{
    AppError, ROLE_NAME_VAR, SOURCE_ACCOUNT_VAR, Settings, TestConfiguration, UniqueId,
};
use crate::ports::{AccountIdentityPort, ProvisionerPort};

/// Discover the caller's account and assemble a fresh configuration.
///
/// Nothing is provisioned here; an account discovery failure returns before
/// any infrastructure is touched.
pub fn build_configuration<I, P>(
    ctx: &AppContext<I, P>,
    settings: &Settings,
) -> Result<TestConfiguration, AppError>
where
    I: AccountIdentityPort,
    P: ProvisionerPort,
{
    let account_id = ctx.identity().current_account_id()?;
    let role_name = UniqueId::with_prefix(&settings.module.name_prefix);

    let mut vars: BTreeMap<String, Value> = settings.vars.clone();
    vars.insert(ROLE_NAME_VAR.to_string(), Value::String(role_name.into()));
    vars.insert(SOURCE_ACCOUNT_VAR.to_string(), Value::String(account_id));

    Ok(TestConfiguration::new(settings.module.dir.clone(), &settings.module.region, vars))
}
