use crate::error::{AppError, AppResult};
use crate::models::Photo;

/// Named values handed to the page for a single response. All
/// optional; absent means not shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub url: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
}

impl RenderContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn photo(photo: &Photo) -> Self {
        Self {
            url: Some(photo.urls.regular.clone()),
            description: photo.alt_description.clone(),
            error: None,
        }
    }

    pub fn failure(error: &AppError) -> Self {
        Self {
            url: None,
            description: None,
            error: Some(error.present()),
        }
    }

    /// Success/failure fold shared by both photo-producing handlers.
    pub fn from_photo_result(result: AppResult<Photo>) -> Self {
        match result {
            Ok(photo) => Self::photo(&photo),
            Err(error) => Self::failure(&error),
        }
    }
}

/// Builds the single page of the app: the two forms, plus the photo
/// or the error block when the context carries one.
pub fn render(ctx: &RenderContext) -> String {
    let mut body = String::new();

    body.push_str(concat!(
        "    <h1>Photo Roulette</h1>\n",
        "    <form method=\"post\" action=\"/random\">\n",
        "      <button type=\"submit\">Random photo</button>\n",
        "    </form>\n",
        "    <form method=\"post\" action=\"/search\">\n",
        "      <input type=\"text\" name=\"search\" placeholder=\"Search photos...\">\n",
        "      <button type=\"submit\">Search</button>\n",
        "    </form>\n",
    ));

    if let Some(url) = &ctx.url {
        let alt = ctx.description.as_deref().unwrap_or("");
        body.push_str(&format!(
            "    <img src=\"{}\" alt=\"{}\">\n",
            escape(url),
            escape(alt)
        ));
        if let Some(description) = &ctx.description {
            body.push_str(&format!("    <p>{}</p>\n", escape(description)));
        }
    }

    if let Some(error) = &ctx.error {
        body.push_str(&format!(
            "    <p class=\"error\">{}</p>\n",
            escape(error)
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "  <head>\n",
            "    <meta charset=\"utf-8\">\n",
            "    <title>Photo Roulette</title>\n",
            "    <link rel=\"stylesheet\" href=\"/public/styles.css\">\n",
            "  </head>\n",
            "  <body>\n",
            "{}",
            "  </body>\n",
            "</html>\n"
        ),
        body
    )
}

/// Minimal HTML escaping for attribute and text positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
