//! Streak freezes administration.

use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{CreateStreakFreezesRequest, CreateStreakFreezesResponse};

#[derive(Clone, Debug)]
pub struct StreakFreezesClient<T> {
    transport: T,
}

impl<T: Transport> StreakFreezesClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Grant streak freezes in bulk.
    pub fn create(
        &self,
        request: &CreateStreakFreezesRequest,
        options: Option<RequestOptions>,
    ) -> T::Output<CreateStreakFreezesResponse> {
        let request = PreparedRequest::post(ApiScope::Admin, "/streaks/freezes")
            .body(request)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
