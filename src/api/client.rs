use super::models::{PageToken, Parameter, ParameterPage, ParameterType};
use super::store::{FetchRequest, ParameterStore, WriteRequest};
use crate::config::Config;
use crate::error::StoreError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use log::debug;
use std::time::Instant;

const GET_PARAMETERS_BY_PATH: &str = "GetParametersByPath";
const PUT_PARAMETER: &str = "PutParameter";

/// AWS Systems Manager Parameter Store client
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Load the AWS configuration once and build the client from it.
    ///
    /// Credentials always come from the SDK default chain. The region does too
    /// unless the config names one.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!("Using endpoint override: {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        debug!("SSM client configured for region {:?}", sdk_config.region());

        Self::with_client(aws_sdk_ssm::Client::new(&sdk_config))
    }

    /// Wrap an already configured SDK client
    pub fn with_client(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn fetch_page(&self, request: &FetchRequest<'_>) -> Result<ParameterPage, StoreError> {
        let started = Instant::now();
        let output = self
            .client
            .get_parameters_by_path()
            .path(request.path)
            .recursive(request.recursive)
            .with_decryption(request.with_decryption)
            .set_max_results(request.page_size)
            .set_next_token(request.next_token.map(|t| t.as_str().to_string()))
            .send()
            .await
            .map_err(|e| {
                StoreError::new(GET_PARAMETERS_BY_PATH, DisplayErrorContext(&e).to_string())
            })?;

        debug!(
            "{} {} returned in {:?}",
            GET_PARAMETERS_BY_PATH,
            request.path,
            started.elapsed()
        );

        let parameters = output
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(convert_parameter)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParameterPage::new(
            parameters,
            PageToken::from_response(output.next_token),
        ))
    }

    async fn write_parameter(&self, request: &WriteRequest<'_>) -> Result<(), StoreError> {
        let started = Instant::now();
        self.client
            .put_parameter()
            .name(request.name)
            .value(request.value)
            .r#type(aws_sdk_ssm::types::ParameterType::from(
                request.parameter_type.as_str(),
            ))
            .overwrite(request.overwrite)
            .send()
            .await
            .map_err(|e| StoreError::new(PUT_PARAMETER, DisplayErrorContext(&e).to_string()))?;

        debug!(
            "{} {} as {} returned in {:?}",
            PUT_PARAMETER,
            request.name,
            request.parameter_type,
            started.elapsed()
        );
        Ok(())
    }
}

fn convert_parameter(parameter: aws_sdk_ssm::types::Parameter) -> Result<Parameter, StoreError> {
    let name = parameter.name.ok_or_else(|| {
        StoreError::new(GET_PARAMETERS_BY_PATH, "response contained a parameter without a name")
    })?;

    let parameter_type = parameter
        .r#type
        .map(|t| ParameterType::from(t.as_str()))
        .unwrap_or_else(|| ParameterType::Other("Unknown".to_string()));

    Ok(Parameter::new(name, parameter.value, parameter_type))
}
