use ureq::Error::{Status, Transport};

use super::{FileDownloader, Response};

use std::io::Read;

pub struct UReqFetcher {
    headers: Vec<(String, String)>,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let request = self
            .headers
            .iter()
            .fold(ureq::request("GET", url), |request, (key, value)| {
                request.set(key, value)
            });

        // Redirects are followed by the agent.
        let response = request.call();

        match response {
            // Anything short of a 4xx that the agent did not follow ends up here.
            Ok(response) if !(200..300).contains(&response.status()) => {
                Response::status(response.status())
            }

            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                match body {
                    Ok(body) => Response::ok(body),
                    Err(error) => Response::invalid_body(error.to_string()),
                }
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        Self::with_headers(Vec::new())
    }

    pub fn with_headers(headers: Vec<(String, String)>) -> Self {
        UReqFetcher { headers }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
