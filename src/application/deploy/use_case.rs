//! Deploy Use Case
//!
//! Runs the fixed pipeline, one platform call per step:
//! 1. Check for an authenticated session
//! 2. Set the active project
//! 3. Enable required APIs
//! 4. Build and tag the image
//! 5. Deploy the managed service
//! 6. Resolve the public URL
//! 7. Optionally map a custom domain (operator decides)
//!
//! The first failure stops the run. Completed steps are not retried or
//! rolled back.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{DeployConfig, DomainMapping, ServiceEndpoints};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, DomainPrompt, NoopEventSink, PlatformClient, PlatformError,
};
use crate::domain::value_objects::DeployStep;
use crate::error::{RuncastError, RuncastResult};

use super::result::DeployResult;

/// Deploy use case - sequences platform operations
///
/// Parameterized by its platform port so the sequencing can be tested
/// without spawning processes.
pub struct DeployUseCase<P>
where
    P: PlatformClient,
{
    platform: P,
}

impl<P> DeployUseCase<P>
where
    P: PlatformClient,
{
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run the pipeline silently
    pub fn execute(
        &self,
        config: &DeployConfig,
        prompt: &dyn DomainPrompt,
    ) -> RuncastResult<DeployResult> {
        self.execute_with_events(config, prompt, Arc::new(NoopEventSink))
    }

    /// Run the pipeline, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        config: &DeployConfig,
        prompt: &dyn DomainPrompt,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> RuncastResult<DeployResult> {
        event_sink.on_event(DeployEvent::Started {
            project: config.project().to_string(),
            region: config.region().to_string(),
            service: config.service_name().to_string(),
            image: config.image().to_string(),
        });

        let outcome = self.run_pipeline(config, prompt, event_sink.as_ref());

        match &outcome {
            Ok(result) => event_sink.on_event(DeployEvent::Completed {
                duration_ms: result.duration_ms(),
            }),
            Err(err) => {
                if let Some(step) = err.failed_step() {
                    event_sink.on_event(DeployEvent::Failed {
                        step,
                        error: err.to_string(),
                    });
                }
            }
        }

        outcome
    }

    fn run_pipeline(
        &self,
        config: &DeployConfig,
        prompt: &dyn DomainPrompt,
        events: &dyn DeployEventSink,
    ) -> RuncastResult<DeployResult> {
        let started_at = Utc::now();

        // Step 1: nothing mutating may run without a session
        events.on_event(DeployEvent::StepStarted {
            step: DeployStep::Authenticate,
        });
        let account = self
            .platform
            .active_account()
            .map_err(|e| RuncastError::step(DeployStep::Authenticate, e))?
            .ok_or(RuncastError::NotAuthenticated)?;
        events.on_event(DeployEvent::AccountDetected {
            account: account.clone(),
        });
        events.on_event(DeployEvent::StepCompleted {
            step: DeployStep::Authenticate,
        });

        // Steps 2-5
        self.run_step(events, DeployStep::ConfigureProject, || {
            self.platform.set_project(config.project())
        })?;
        self.run_step(events, DeployStep::EnableApis, || {
            self.platform.enable_apis(config.apis())
        })?;
        self.run_step(events, DeployStep::BuildImage, || {
            self.platform
                .submit_build(config.source_dir(), config.image())
        })?;
        self.run_step(events, DeployStep::DeployService, || {
            self.platform.deploy_service(&config.service_spec())
        })?;

        // Step 6
        let endpoints =
            self.run_step(events, DeployStep::ResolveUrl, || self.fetch_endpoints(config))?;
        events.on_event(DeployEvent::ServiceReady {
            endpoints: endpoints.clone(),
        });

        // Step 7
        let domain = self.map_domain(config, prompt, events)?;

        Ok(DeployResult {
            account,
            project: config.project().to_string(),
            region: config.region().to_string(),
            service: config.service_name().to_string(),
            image: config.image().to_string(),
            endpoints,
            domain,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Step 6 on its own: endpoints of an already deployed service
    pub fn resolve_endpoints(&self, config: &DeployConfig) -> RuncastResult<ServiceEndpoints> {
        self.fetch_endpoints(config)
            .map_err(|e| RuncastError::step(DeployStep::ResolveUrl, e))
    }

    fn fetch_endpoints(&self, config: &DeployConfig) -> Result<ServiceEndpoints, PlatformError> {
        let url = self
            .platform
            .service_url(config.service_name(), config.region())?;
        if url.trim().is_empty() {
            return Err(PlatformError::UnexpectedOutput {
                command: format!("describe service {}", config.service_name()),
                message: "service has no public URL".to_string(),
            });
        }
        Ok(ServiceEndpoints::from_url(&url))
    }

    fn map_domain(
        &self,
        config: &DeployConfig,
        prompt: &dyn DomainPrompt,
        events: &dyn DeployEventSink,
    ) -> RuncastResult<Option<DomainMapping>> {
        if !prompt.confirm_mapping(config.service_name())? {
            events.on_event(DeployEvent::DomainSkipped);
            return Ok(None);
        }

        let domain = prompt.domain()?;

        let records = self.run_step(events, DeployStep::MapDomain, || {
            self.platform
                .create_domain_mapping(config.service_name(), &domain, config.region())?;
            self.platform.describe_domain_mapping(&domain, config.region())
        })?;

        events.on_event(DeployEvent::DomainMapped {
            domain: domain.to_string(),
            records: records.clone(),
        });

        Ok(Some(DomainMapping::new(domain, records)))
    }

    /// Run one platform call as `step`, emitting start/complete events.
    fn run_step<T>(
        &self,
        events: &dyn DeployEventSink,
        step: DeployStep,
        op: impl FnOnce() -> Result<T, PlatformError>,
    ) -> RuncastResult<T> {
        events.on_event(DeployEvent::StepStarted { step });
        let value = op().map_err(|e| RuncastError::step(step, e))?;
        events.on_event(DeployEvent::StepCompleted { step });
        Ok(value)
    }
}
