mod conversation;
mod walker;

use std::path::Path;

use crate::prelude::{eprintln, println, *};
use codeshift_core::catalog;
use codeshift_core::extract::extract_code;
use codeshift_core::paths::output_rel_path;
use codeshift_core::prompt::{critic_preamble, translation_task, translator_preamble};
use codeshift_core::TranslationJob;
use rig::client::CompletionClient;
use rig::providers::openai;

pub use conversation::{Conversation, Responder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    Python,
    #[clap(alias = "js")]
    JavaScript,
    Java,
    #[clap(name = "c#", alias = "csharp")]
    CSharp,
    #[clap(name = "c++", alias = "cpp")]
    Cpp,
    Ruby,
    Go,
    #[clap(name = "visual-basic", alias = "vb")]
    VisualBasic,
    Php,
    Swift,
}

impl From<Language> for catalog::Language {
    fn from(l: Language) -> Self {
        match l {
            Language::Python => catalog::Language::Python,
            Language::JavaScript => catalog::Language::JavaScript,
            Language::Java => catalog::Language::Java,
            Language::CSharp => catalog::Language::CSharp,
            Language::Cpp => catalog::Language::Cpp,
            Language::Ruby => catalog::Language::Ruby,
            Language::Go => catalog::Language::Go,
            Language::VisualBasic => catalog::Language::VisualBasic,
            Language::Php => catalog::Language::Php,
            Language::Swift => catalog::Language::Swift,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "translate")]
#[command(about = "Translate a source tree between programming languages")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Walk the input tree and translate every file
    #[clap(name = "run")]
    Run(RunOptions),
}

#[derive(Debug, clap::Parser)]
pub struct RunOptions {
    /// Source programming language
    #[clap(long = "from", value_enum)]
    pub from: Language,

    /// Target programming language
    #[clap(long = "to", value_enum)]
    pub to: Language,

    /// Input directory containing source code
    #[clap(long, default_value = "input-app")]
    pub input_dir: std::path::PathBuf,

    /// Output directory for translated code
    #[clap(long, default_value = "output-app")]
    pub output_dir: std::path::PathBuf,

    /// Model name used for both the translator and the critic
    #[clap(long, env = "CODESHIFT_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Sampling temperature
    #[clap(long, default_value_t = 0.1)]
    pub temperature: f64,

    /// API key for the model endpoint
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL for OpenAI-compatible endpoints
    #[clap(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,
}

/// Per-run counters reported after the walk completes.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub translated: usize,
    pub skipped: usize,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Run(options) => translate(options, global).await,
    }
}

fn create_client(api_key: &str, base_url: Option<&str>) -> Result<openai::Client> {
    let mut builder = openai::Client::builder().api_key(api_key);

    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }

    builder
        .build()
        .map_err(|e| eyre!("Failed to create OpenAI client: {}", e))
}

async fn translate(options: RunOptions, global: crate::Global) -> Result<()> {
    let source: catalog::Language = options.from.into();
    let target: catalog::Language = options.to.into();

    if global.verbose {
        eprintln!("Model: {}", options.model);
        eprintln!("Temperature: {}", options.temperature);
        eprintln!("Translating {} -> {}", source, target);
    }

    let client = create_client(&options.api_key, options.base_url.as_deref())?;

    // Languages are fixed for the whole run, so both agents are built once.
    let translator = client
        .agent(&options.model)
        .preamble(&translator_preamble(source, target))
        .temperature(options.temperature)
        .build();
    let critic = client
        .agent(&options.model)
        .preamble(&critic_preamble(target))
        .temperature(options.temperature)
        .build();

    let conversation = Conversation::new(translator, critic);

    let summary = translate_tree(
        &options.input_dir,
        &options.output_dir,
        source,
        target,
        &conversation,
        global.verbose,
    )
    .await?;

    println!(
        "Done: {} translated, {} skipped",
        summary.translated, summary.skipped
    );

    Ok(())
}

/// Walk the input tree and translate each file through one conversation.
///
/// Files are processed sequentially, one conversation at a time. Extraction
/// failure skips the file with a warning; an endpoint failure aborts the run.
async fn translate_tree<T: Responder, C: Responder>(
    input_dir: &Path,
    output_dir: &Path,
    source: catalog::Language,
    target: catalog::Language,
    conversation: &Conversation<T, C>,
    verbose: bool,
) -> Result<RunSummary> {
    let files = walker::walk_files(input_dir)?;
    let mut summary = RunSummary::default();

    for relative in &files {
        let source_text = walker::read_source(&input_dir.join(relative)).await?;
        let job = TranslationJob::new(relative.clone(), source_text, source, target);

        let final_text = conversation.run(&translation_task(&job)).await?;
        let code = extract_code(&final_text);

        if code.is_empty() {
            eprintln!("Warning: No valid code extracted for {}", relative.display());
            summary.skipped += 1;
            continue;
        }

        let output_path = output_dir.join(output_rel_path(relative, target));
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .wrap_err_with(|| f!("Failed to create directory '{}'", parent.display()))?;
        }
        tokio::fs::write(&output_path, &code)
            .await
            .wrap_err_with(|| f!("Failed to write file '{}'", output_path.display()))?;

        if verbose {
            println!("{}", code);
        }
        println!("{} -> {}", relative.display(), output_path.display());
        summary.translated += 1;
    }

    Ok(summary)
}
