//! Points endpoints.

use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{PointsRange, PointsTriggerResponse};

#[derive(Clone, Debug)]
pub struct PointsClient<T> {
    transport: T,
}

impl<T: Transport> PointsClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Distribution of users across points ranges.
    pub fn summary(&self, options: Option<RequestOptions>) -> T::Output<Vec<PointsRange>> {
        let request = PreparedRequest::get(ApiScope::Api, "/points/summary").with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Configured points triggers.
    pub fn triggers(
        &self,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<PointsTriggerResponse>> {
        let request =
            PreparedRequest::get(ApiScope::Api, "/points/triggers").with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
