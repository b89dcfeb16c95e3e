//! Response types.

/// Status codes the server can produce.
///
/// Failures close the connection without a response, so only success is
/// ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
        }
    }
}

/// A response carrying file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The status code
    pub status: StatusCode,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A `200 OK` response with `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            body: body.into(),
        }
    }

    /// Value of the `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {code} {reason}\r\nContent-Length: {len}\r\n\r\n",
            code = self.status as u16,
            reason = self.status.reason_phrase(),
            len = self.content_length(),
        );

        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}
