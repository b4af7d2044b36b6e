use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

const CONTACT_LANGUAGE: &str = "contact";

/// Body of one fenced `contact` block and the line its fence opens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBlock {
    pub line: usize,
    pub body: String,
}

pub fn find_contact_blocks(document: &str) -> Vec<ContactBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<ContactBlock> = None;

    for (event, range) in Parser::new(document).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if is_contact_fence(&info) {
                    current = Some(ContactBlock {
                        line: line_number(document, range.start),
                        body: String::new(),
                    });
                }
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.body.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

fn is_contact_fence(info: &str) -> bool {
    info.split_whitespace().next() == Some(CONTACT_LANGUAGE)
}

fn line_number(document: &str, offset: usize) -> usize {
    document[..offset].matches('\n').count() + 1
}
