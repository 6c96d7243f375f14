mod block;
mod config;
mod error;
mod inline;
mod parser;
mod transcript;
mod typst;

pub use block::{Block, Span};
pub use config::{Config, LabelsConfig, PageConfig, TranscriptConfig};
pub use error::{Error, Result};
pub use inline::tokenize_inline;
pub use transcript::{ChatRequest, ChatResponse, Message, MessageBody, RenderedMessage, Role};

use tracing::info;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_library::layout::PagedDocument;
use typst_pdf::PdfOptions;

/// Render a chat message into one block per line.
pub fn render(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Convert one assistant message to Typst markup.
pub fn message_to_typst(markdown: &str, config: &Config) -> String {
    let blocks = render(markdown);
    typst::blocks_to_typst(&blocks, config)
}

/// Convert a conversation to Typst markup.
pub fn transcript_to_typst(messages: &[Message], config: &Config) -> String {
    let rendered: Vec<RenderedMessage> = messages.iter().map(Message::render).collect();
    typst::transcript_to_typst(&rendered, config)
}

/// Convert one assistant message to PDF bytes.
pub fn message_to_pdf(markdown: &str, config: &Config) -> Result<Vec<u8>> {
    typst_to_pdf(message_to_typst(markdown, config))
}

/// Convert a conversation to PDF bytes.
pub fn transcript_to_pdf(messages: &[Message], config: &Config) -> Result<Vec<u8>> {
    typst_to_pdf(transcript_to_typst(messages, config))
}

fn typst_to_pdf(typst_content: String) -> Result<Vec<u8>> {
    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Compile(format!("{:?}", e)))?;

    let bytes = typst_pdf::pdf(&doc, &PdfOptions::default())
        .map_err(|e| Error::Pdf(format!("{:?}", e)))?;

    info!(pages = doc.pages.len(), bytes = bytes.len(), "compiled PDF");
    Ok(bytes)
}
