//! Transport seam.

use std::rc::Rc;

use async_trait::async_trait;

use crate::{FetchError, Request, Response};

/// Sends a request and yields the response.
///
/// Implementations run on the page's single thread, so the returned futures
/// are not `Send`. A transport reports only transport-level failures; status
/// handling is done by [`FetchClient::send_json`](crate::FetchClient::send_json).
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        (**self).send(request).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        (**self).send(request).await
    }
}
