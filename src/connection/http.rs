use crate::app::error::Error;
use crate::connection::SendMessage;
use bytes::Bytes;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use reqwest::blocking::Client;
use reqwest::blocking::Request;
use std::convert::TryFrom;

impl SendMessage<HttpRequest<Vec<u8>>, Result<HttpResponse<Bytes>, Error>> for Client {
    fn send(&self, data: HttpRequest<Vec<u8>>) -> Result<HttpResponse<Bytes>, Error> {
        let request: Request = Request::try_from(data)?;
        let response = self.execute(request)?;
        let status = response.status();
        let body = response.bytes()?;
        Ok(HttpResponse::builder().status(status).body(body)?)
    }
}
