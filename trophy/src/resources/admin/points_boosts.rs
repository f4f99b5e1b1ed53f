//! Points boosts administration.

use trophy_core::execution::encode_path_segment;
use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{
    ArchivePointsBoostsResponse, CreatePointsBoostsRequest, CreatePointsBoostsResponse,
};

#[derive(Clone, Debug)]
pub struct PointsBoostsClient<T> {
    transport: T,
}

impl<T: Transport> PointsBoostsClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Create boosts in bulk. Rejected items are reported in `issues`
    /// rather than failing the whole call.
    pub fn create(
        &self,
        request: &CreatePointsBoostsRequest,
        options: Option<RequestOptions>,
    ) -> T::Output<CreatePointsBoostsResponse> {
        let request = PreparedRequest::post(ApiScope::Admin, "/points/boosts")
            .body(request)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Archive every boost in `ids`.
    pub fn batch_archive<I, S>(
        &self,
        ids: I,
        options: Option<RequestOptions>,
    ) -> T::Output<ArchivePointsBoostsResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let request = PreparedRequest::delete(ApiScope::Admin, "/points/boosts")
            .query("ids", Some(ids))
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn archive(&self, id: &str, options: Option<RequestOptions>) -> T::Output<()> {
        let request = PreparedRequest::delete(
            ApiScope::Admin,
            format!("/points/boosts/{}", encode_path_segment(id)),
        )
        .with_options(options);
        self.transport.execute(ApiCall::no_content(request))
    }
}
