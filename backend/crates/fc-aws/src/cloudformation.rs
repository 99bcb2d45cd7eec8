use crate::{describe_failure, is_no_update_message, stack_signal};

use fc_core::{
    CoreError, DesiredParameterSet, Result as CoreErrorResult, StackGateway, StackSignal,
    SubmissionReceipt,
};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::{Capability, Parameter};
use log::{debug, info};
use tracing::instrument;

/// The declarative stack, updated in place with its previous template
pub struct CloudFormationStack {
    client: Client,
    stack_name: String,
}

impl CloudFormationStack {
    pub fn new(sdk_config: &SdkConfig, stack_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            stack_name: stack_name.into(),
        }
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }
}

#[async_trait]
impl StackGateway for CloudFormationStack {
    #[instrument(skip(self), fields(stack = %self.stack_name))]
    async fn describe(&self) -> CoreErrorResult<StackSignal> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(&self.stack_name)
            .send()
            .await
            .map_err(|e| {
                describe_failure(
                    &self.stack_name,
                    e.code(),
                    e.message(),
                    DisplayErrorContext(&e).to_string(),
                )
            })?;

        let stack = output
            .stacks()
            .first()
            .ok_or_else(|| CoreError::not_found(&self.stack_name))?;

        let signal = stack_signal(
            stack.stack_status().map(|s| s.as_str()),
            stack
                .parameters()
                .iter()
                .map(|p| (p.parameter_key(), p.parameter_value())),
        );
        debug!("Stack {} is {}", self.stack_name, signal.deployment_status);

        Ok(signal)
    }

    #[instrument(
        skip(self, parameters),
        fields(stack = %self.stack_name, action = %parameters.action())
    )]
    async fn submit(&self, parameters: &DesiredParameterSet) -> CoreErrorResult<SubmissionReceipt> {
        let cf_parameters = parameters
            .entries()
            .iter()
            .map(|(key, value)| {
                Parameter::builder()
                    .parameter_key(key.as_str())
                    .parameter_value(value)
                    .build()
            })
            .collect::<Vec<_>>();

        let result = self
            .client
            .update_stack()
            .stack_name(&self.stack_name)
            .use_previous_template(true)
            .set_parameters(Some(cf_parameters))
            .capabilities(Capability::CapabilityIam)
            .send()
            .await;

        match result {
            Ok(output) => {
                let stack_id = output
                    .stack_id()
                    .unwrap_or(self.stack_name.as_str())
                    .to_string();
                info!("Submitted {} update for {}", parameters.action(), stack_id);
                Ok(SubmissionReceipt::Submitted { stack_id })
            }
            Err(e) if is_no_update_message(e.code(), e.message()) => {
                info!("Stack {} already has the requested parameters", self.stack_name);
                Ok(SubmissionReceipt::Unchanged)
            }
            Err(e) => Err(CoreError::submission(DisplayErrorContext(&e).to_string())),
        }
    }
}
