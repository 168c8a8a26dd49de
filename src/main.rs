use clap::Parser;
use std::io::Read;

use perspective::config::{Config, API_KEY_ENV};
use perspective::{Client, Context, ContextEntry, Options};

#[derive(clap::Parser, Debug)]
struct Opts {
    /// TOML file with `api_key` and an `[options]` table.
    #[clap(long)]
    config: Option<std::path::PathBuf>,

    #[clap(long, env = "PERSPECTIVE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Attribute to score, may be repeated.
    #[clap(short, long = "attribute")]
    attributes: Vec<String>,

    /// Language code, may be repeated.
    #[clap(short, long = "language")]
    languages: Vec<String>,

    /// Preceding comment to send as context, may be repeated.
    #[clap(long = "context")]
    context: Vec<String>,

    /// Send the text without stripping HTML tags.
    #[clap(long)]
    keep_html: bool,

    /// Allow the API to store the comment.
    #[clap(long)]
    store: bool,

    /// Text to score. Read from stdin when omitted.
    text: Option<String>,
}

impl Opts {
    fn apply(&self, options: &mut Options) {
        if !self.attributes.is_empty() {
            options.attributes = self.attributes.clone();
        }
        if !self.languages.is_empty() {
            options.languages = self.languages.clone();
        }
        if !self.context.is_empty() {
            options.context = Some(Context {
                entries: self.context.iter().map(ContextEntry::text).collect(),
            });
        }
        if self.keep_html {
            options.strip_html = false;
        }
        if self.store {
            options.do_not_store = false;
        }
    }
}

fn read_text(text: Option<String>) -> Result<String, anyhow::Error> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::builder()
        .filter_module("perspective", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = Opts::parse();

    let config = match opts.config.as_ref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let api_key = opts.api_key.clone().or(config.api_key).ok_or_else(|| {
        anyhow::format_err!("no API key: pass --api-key, set {} or api_key in the config file", API_KEY_ENV)
    })?;

    let mut options = config.options;
    opts.apply(&mut options);

    let text = read_text(opts.text)?;
    log::info!("scoring {} UTF-16 units for {:?}", text.encode_utf16().count(), options.attributes);

    let client = Client::new(api_key);
    let scores = client.get_scores_with(&text, &options).await?;

    let sorted = scores.into_iter().collect::<std::collections::BTreeMap<_, _>>();
    println!("{}", serde_json::to_string_pretty(&sorted)?);

    Ok(())
}
