use reqwest::header::ACCEPT;
use reqwest::{Client, Response};

/// HTTP transport seam for the token exchange.
///
/// A single capability: send the prepared form-encoded POST and hand back
/// the response or the transport error. Timeouts, TLS and pooling belong to
/// the injected client; one transport may back any number of holders.
pub trait Transport {
    fn send_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> impl std::future::Future<Output = Result<Response, reqwest::Error>> + Send;
}

impl Transport for Client {
    async fn send_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        self.post(url)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
    }
}
