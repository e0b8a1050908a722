//! Fetch Transport
//!
//! `Transport` over `window.fetch`. Multipart bodies go through
//! `FormData` so the browser picks the boundary.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use library_core::{Body, ClientError, ClientResult, HttpRequest, HttpResponse, Part, Transport};

pub struct FetchTransport;

fn js_error(value: JsValue) -> ClientError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ClientError::Network(message)
}

fn form_data(parts: &[(String, Part<web_sys::File>)]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (name, part) in parts {
        match part {
            Part::Text(text) => form.append_with_str(name, text)?,
            Part::File(file) => form.append_with_blob(name, file)?,
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type File = web_sys::File;

    async fn send(&self, request: HttpRequest<web_sys::File>) -> ClientResult<HttpResponse> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if request.with_credentials {
            init.set_credentials(RequestCredentials::Include);
        }

        let headers = Headers::new().map_err(js_error)?;
        if let Some(token) = &request.bearer {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_error)?;
        }
        match &request.body {
            Body::Empty => {}
            Body::Json(value) => {
                headers.set("Content-Type", "application/json").map_err(js_error)?;
                init.set_body(&JsValue::from_str(&value.to_string()));
            }
            Body::Multipart(parts) => {
                let form = form_data(parts).map_err(js_error)?;
                init.set_body(&form.into());
            }
        }
        init.set_headers(&headers);

        let fetch_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| ClientError::Network("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
