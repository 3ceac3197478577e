use reqwest::Client;

use crate::error::AppError;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// One request to the Google Translate TTS endpoint.
pub struct TtsRequest<'a> {
    pub text: &'a str,
    pub lang: &'a str,
    pub slow: bool,
    pub idx: usize,
    pub total: usize,
}

impl TtsRequest<'_> {
    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ie", "UTF-8".to_string()),
            ("client", "tw-ob".to_string()),
            ("tl", self.lang.to_string()),
            ("q", self.text.to_string()),
            ("total", self.total.to_string()),
            ("idx", self.idx.to_string()),
            ("textlen", self.text.chars().count().to_string()),
            ("ttsspeed", if self.slow { "0.3" } else { "1" }.to_string()),
        ]
    }
}

/// Expand `{tld}` in the host template.
pub fn host_for(template: &str, tld: &str) -> String {
    template.replace("{tld}", tld).trim_end_matches('/').to_string()
}

/// Fetch MP3 bytes for one chunk of text.
pub async fn fetch(client: &Client, host: &str, request: &TtsRequest<'_>) -> Result<Vec<u8>, AppError> {
    let url = format!("{}/translate_tts", host);

    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::REFERER, format!("{}/", host))
        .query(&request.query())
        .send()
        .await
        .map_err(|e| AppError::Synthesis(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Synthesis(format!(
            "Speech service returned {} for chunk {}/{}",
            status.as_u16(),
            request.idx + 1,
            request.total
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Synthesis(format!("Failed to read audio: {}", e)))?;

    Ok(bytes.to_vec())
}
