//! `sdoc render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use sdoc_comment::{CommentParser, DecodeError};
use sdoc_config::{CliSettings, Config, ExternalDocConfig, OutputFormat};
use sdoc_markup::{
    DocumentationHeader, Entity, FileDocumentation, GeneratorOptions, Heading, Linker,
    MarkdownGenerator,
};

use crate::error::CliError;
use crate::output::Output;

/// External documentation used when no rule for the namespace is configured.
const DEFAULT_EXTERNAL_DOC: (&str, &str) = (
    "std",
    "https://en.cppreference.com/mwiki/index.php?title=Special%3ASearch&search=$$",
);

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Comment file to render.
    input: PathBuf,

    /// Emit raw HTML anchors and highlighted code (overrides config).
    #[arg(long)]
    html: bool,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the documented file (default: input file name).
    #[arg(long)]
    name: Option<String>,

    /// Prefix of documentation links (overrides config).
    #[arg(long)]
    link_prefix: Option<String>,

    /// Extension of linked documents (overrides config).
    #[arg(long)]
    link_extension: Option<String>,

    /// External documentation rule, tried before configured ones.
    #[arg(long = "external-doc", value_name = "NS=URL", value_parser = parse_external_doc)]
    external_doc: Vec<ExternalDocConfig>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            format: self.html.then_some(OutputFormat::CommonmarkHtml),
            link_prefix: self.link_prefix.clone(),
            link_extension: self.link_extension.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration");
        }

        let name = match self.name {
            Some(name) => name,
            None => input_name(&self.input)?,
        };
        let comment = std::fs::read_to_string(&self.input)?;
        let linker = build_linker(&self.external_doc, &config.external_doc);

        let rendered =
            render_comment(&name, &comment, &config, &linker).map_err(|source| {
                CliError::Decode {
                    path: self.input.display().to_string(),
                    source,
                }
            })?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                output.success(&format!("Rendered {name} to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Decode `comment` and render it as the documentation of file `name`.
fn render_comment(
    name: &str,
    comment: &str,
    config: &Config,
    linker: &Linker,
) -> Result<String, DecodeError> {
    let details = CommentParser::new()
        .parse(comment)?
        .into_details()
        .unwrap_or_default();

    let documentation = FileDocumentation::builder(name)
        .with_header(DocumentationHeader::new(Heading::from_text(name)))
        .with_details(details)
        .finish();

    let generator = MarkdownGenerator::new(GeneratorOptions {
        html: config.output.format.is_html(),
        link_prefix: config.output.link_prefix.clone(),
        link_extension: config.output.link_extension.clone(),
        linker: Some(linker),
    });
    Ok(generator.render(&Entity::from(documentation)))
}

/// Build the link table: CLI rules, then configured rules, then the default.
fn build_linker(cli: &[ExternalDocConfig], configured: &[ExternalDocConfig]) -> Linker {
    let mut linker = Linker::new();
    for rule in cli.iter().chain(configured) {
        linker.register_external(rule.namespace.as_str(), rule.url.as_str());
    }
    let (namespace, url) = DEFAULT_EXTERNAL_DOC;
    linker.register_external(namespace, url);
    linker
}

fn input_name(input: &Path) -> Result<String, CliError> {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CliError::Validation(format!("Invalid input path: {}", input.display()))
        })
}

/// Parse an `NS=URL` external documentation rule.
fn parse_external_doc(value: &str) -> Result<ExternalDocConfig, String> {
    let (namespace, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NS=URL, got '{value}'"))?;
    if namespace.is_empty() {
        return Err("namespace cannot be empty".to_owned());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_owned());
    }
    Ok(ExternalDocConfig {
        namespace: namespace.to_owned(),
        url: url.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdoc_cmark::NodeType;

    fn render(comment: &str, config: &Config) -> Result<String, DecodeError> {
        let linker = build_linker(&[], &config.external_doc);
        render_comment("notes", comment, config, &linker)
    }

    #[test]
    fn test_render_plain() {
        let output = render("Hello\nworld.\n\nSecond paragraph.", &Config::default()).unwrap();
        assert_eq!(output, "# notes\n\nHello world.\n\nSecond paragraph.\n");
    }

    #[test]
    fn test_render_html() {
        let mut config = Config::default();
        config.output.format = OutputFormat::CommonmarkHtml;

        let output = render("Hello.", &config).unwrap();
        assert_eq!(
            output,
            "# notes\n\n<a id=\"standardese-notes\">\n</a>\n\nHello.\n"
        );
    }

    #[test]
    fn test_render_empty_comment() {
        assert_eq!(render("", &Config::default()).unwrap(), "# notes\n");
    }

    #[test]
    fn test_render_unsupported_markup() {
        assert_eq!(
            render("# Title", &Config::default()),
            Err(DecodeError::UnsupportedNode {
                kind: NodeType::Heading
            })
        );
    }

    #[test]
    fn test_build_linker_rule_order() {
        let cli = [ExternalDocConfig {
            namespace: "std".to_owned(),
            url: "https://cli.example.com/$$".to_owned(),
        }];
        let configured = [ExternalDocConfig {
            namespace: "std".to_owned(),
            url: "https://config.example.com/$$".to_owned(),
        }];

        let linker = build_linker(&cli, &configured);
        let resolved = linker.resolve(&sdoc_markup::LinkDestination::Unresolved(
            "std::string".into(),
        ));
        assert_eq!(
            resolved,
            sdoc_markup::LinkDestination::External(
                "https://cli.example.com/std%3A%3Astring".to_owned()
            )
        );
    }

    #[test]
    fn test_default_std_rule() {
        let linker = build_linker(&[], &[]);
        let resolved = linker.resolve(&sdoc_markup::LinkDestination::Unresolved(
            "std::vector".into(),
        ));
        assert_eq!(
            resolved,
            sdoc_markup::LinkDestination::External(
                "https://en.cppreference.com/mwiki/index.php?title=Special%3ASearch&search=std%3A%3Avector"
                    .to_owned()
            )
        );
    }

    #[test]
    fn test_parse_external_doc() {
        assert_eq!(
            parse_external_doc("boost=https://www.boost.org/?q=$$"),
            Ok(ExternalDocConfig {
                namespace: "boost".to_owned(),
                url: "https://www.boost.org/?q=$$".to_owned(),
            })
        );
        assert_eq!(
            parse_external_doc("boost"),
            Err("expected NS=URL, got 'boost'".to_owned())
        );
        assert!(parse_external_doc("=https://example.com").is_err());
        assert!(parse_external_doc("boost=www.boost.org").is_err());
    }

    #[test]
    fn test_input_name() {
        assert_eq!(
            input_name(Path::new("docs/notes.txt")).unwrap(),
            "notes.txt"
        );
        assert!(matches!(
            input_name(Path::new("..")),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes");
        std::fs::write(&input, "Hello.").unwrap();
        let config_path = dir.path().join("sdoc.toml");
        std::fs::write(&config_path, "").unwrap();
        let output_path = dir.path().join("notes.md");

        let args = RenderArgs {
            input,
            html: false,
            output: Some(output_path.clone()),
            config: Some(config_path),
            name: None,
            link_prefix: None,
            link_extension: None,
            external_doc: Vec::new(),
            verbose: false,
        };
        args.execute().unwrap();

        assert_eq!(
            std::fs::read_to_string(output_path).unwrap(),
            "# notes\n\nHello.\n"
        );
    }
}
