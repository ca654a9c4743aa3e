use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceInfo},
    types::ContentBlock,
};

#[derive(Debug)]
enum LeafState {
    Text { buf: String },
    Fence { info: FenceInfo, buf: String },
}

/// Phase 2 of content scanning: a state machine that consumes classified
/// lines and emits [`ContentBlock`]s in document order.
pub struct BlockBuilder {
    default_language: String,
    leaf: LeafState,
    out: Vec<ContentBlock>,
}

impl BlockBuilder {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            leaf: LeafState::Text { buf: String::new() },
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str, class: LineClass<'_>) {
        // Fences are raw zones: only another fence marker means anything.
        if self.in_fence() {
            match class {
                LineClass::Fence { .. } => self.close_fence(true),
                _ => self.append(line),
            }
            return;
        }

        match class {
            LineClass::Fence { info } => {
                self.flush_text();
                self.leaf = LeafState::Fence {
                    info: CodeFence::parse_info(info, &self.default_language),
                    buf: String::new(),
                };
            }
            LineClass::Directive(block) => {
                self.flush_text();
                self.out.push(block);
            }
            LineClass::Text => self.append(line),
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        if self.in_fence() {
            log::warn!("unterminated code fence at end of content; emitting it as a code block");
            self.close_fence(false);
        } else {
            self.flush_text();
        }
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn append(&mut self, line: &str) {
        let buf = match &mut self.leaf {
            LeafState::Text { buf } | LeafState::Fence { buf, .. } => buf,
        };
        buf.push_str(line);
        buf.push('\n');
    }

    fn flush_text(&mut self) {
        if let LeafState::Text { buf } = &mut self.leaf {
            let content = std::mem::take(buf);
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                self.out.push(ContentBlock::Text {
                    content: trimmed.to_string(),
                });
            }
        }
    }

    /// Emits the open fence as a code block. A closed fence is always emitted;
    /// an unterminated one only when it holds something other than whitespace.
    fn close_fence(&mut self, terminated: bool) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::Text { buf: String::new() });
        if let LeafState::Fence { info, buf } = prev {
            let content = CodeFence::trim_body(&buf);
            if content.is_empty() && !terminated {
                return;
            }
            self.out.push(ContentBlock::Code {
                content,
                language: info.language,
                title: info.title,
            });
        }
    }
}
