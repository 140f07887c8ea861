//! Setup → Provision → Validate → Teardown.

use chrono::Utc;

use crate::app::AppContext;
use crate::app::commands::setup::build_configuration;
use crate::app::commands::teardown::TeardownGuard;
use crate::domain::{
    AppError, Phase, ROLE_NAME_VAR, RunReport, SOURCE_ACCOUNT_VAR, Settings, TestConfiguration,
};
use crate::ports::{AccountIdentityPort, ProvisionerPort};

/// Result of a run: the report is always produced, the error only on failure.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    pub error: Option<AppError>,
}

impl RunOutcome {
    pub fn into_result(self) -> Result<RunReport, AppError> {
        match self.error {
            None => Ok(self.report),
            Some(err) => Err(err),
        }
    }
}

/// Execute one full check against the module described by `settings`.
pub fn execute<I, P>(ctx: &AppContext<I, P>, settings: &Settings) -> RunOutcome
where
    I: AccountIdentityPort,
    P: ProvisionerPort,
{
    let mut report = RunReport::new(Utc::now());

    eprintln!("==> Discovering account identity...");
    let config = match build_configuration(ctx, settings) {
        Ok(config) => {
            report.record(Phase::Setup, Ok(()));
            config
        }
        Err(e) => {
            eprintln!("  ❌ {}", e);
            report.record(Phase::Setup, Err(e.to_string()));
            report.skip(Phase::Provision);
            report.skip(Phase::Validate);
            report.skip(Phase::Teardown);
            report.finish(Utc::now());
            return RunOutcome { report, error: Some(e) };
        }
    };
    describe(&mut report, &config);

    let teardown = TeardownGuard::arm(ctx.provisioner(), &config);
    let checked = provision_and_validate(ctx.provisioner(), settings, &config, &mut report);

    eprintln!("==> Destroying role {}...", report.role_name);
    let destroyed = teardown.finish();
    report.record(Phase::Teardown, destroyed.as_ref().map(|_| ()).map_err(ToString::to_string));
    match &destroyed {
        Ok(()) => eprintln!("  ✅ Destroyed"),
        Err(e) => eprintln!("  ❌ {}", e),
    }

    report.finish(Utc::now());
    let error = match checked {
        Ok(()) => destroyed.err(),
        Err(primary) => Some(primary.with_teardown(destroyed)),
    };
    RunOutcome { report, error }
}

fn describe(report: &mut RunReport, config: &TestConfiguration) {
    report.role_name = config.string_var(ROLE_NAME_VAR).unwrap_or_default().to_string();
    report.account_id = config.string_var(SOURCE_ACCOUNT_VAR).unwrap_or_default().to_string();
    report.region = config.region().unwrap_or_default().to_string();
    eprintln!(
        "  ✅ Account {} / region {} / role {}",
        report.account_id, report.region, report.role_name
    );
}

fn provision_and_validate<P: ProvisionerPort>(
    provisioner: &P,
    settings: &Settings,
    config: &TestConfiguration,
    report: &mut RunReport,
) -> Result<(), AppError> {
    eprintln!("==> Applying module in {}...", config.module_dir().display());
    let provisioned =
        provisioner.init_and_apply(config).and_then(|()| provisioner.output_all(config));
    let outputs = match provisioned {
        Ok(outputs) => {
            eprintln!("  ✅ Applied ({} outputs)", outputs.len());
            report.record(Phase::Provision, Ok(()));
            report.outputs = outputs.to_display_map();
            outputs
        }
        Err(e) => {
            eprintln!("  ❌ {}", e);
            report.record(Phase::Provision, Err(e.to_string()));
            report.skip(Phase::Validate);
            return Err(e);
        }
    };

    eprintln!("==> Validating outputs...");
    match settings.expectations().validate(config, &outputs) {
        Ok(validated) => {
            for (name, value) in &validated.values {
                eprintln!("  ✅ {} = {}", name, value);
            }
            report.record(Phase::Validate, Ok(()));
            Ok(())
        }
        Err(failure) => {
            eprintln!("  ❌ {}", failure);
            report.record(Phase::Validate, Err(failure.to_string()));
            Err(failure.into())
        }
    }
}
