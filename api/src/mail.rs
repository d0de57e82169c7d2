use anyhow::{Context, bail};
use gloo_net::http::Request;

use serde::{Deserialize, Serialize};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// structs and types

// the template parameters handed to the mail service
//
// the field names are the variables referenced by the email template, so
// they cannot be renamed without also editing the template upstream
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

// which account, service and template a send should go through
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MailRoute {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

// messages

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendEmailReq {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl SendEmailReq {
    pub fn new(route: &MailRoute, template_params: TemplateParams) -> Self {
        SendEmailReq {
            service_id: route.service_id.clone(),
            template_id: route.template_id.clone(),
            user_id: route.public_key.clone(),
            template_params,
        }
    }
}

// the service answers with a bare text body ("OK" on success), which we keep
// around only for diagnostics
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SendEmailResp {
    pub status: u16,
    pub text: String,
}

// send a single email
//
// anything other than a 200 is reported as an error carrying the status and
// whatever text the service returned
pub async fn send_email(endpoint: &str, req: &SendEmailReq) -> anyhow::Result<SendEmailResp> {
    let resp = Request::post(endpoint).json(req)?.send().await?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .with_context(|| format!("mail service returned {status} with an unreadable body"))?;

    receipt(status, text)
}

fn receipt(status: u16, text: String) -> anyhow::Result<SendEmailResp> {
    if status != 200 {
        bail!("mail service returned {status}: {text}");
    }

    Ok(SendEmailResp { status, text })
}

#[cfg(test)]
#[path = "tests/mail_tests.rs"]
mod tests;
