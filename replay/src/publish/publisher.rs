use crate::publish::model::Frame;
use anyhow::Context;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes every derived render as one JSON line.
pub struct Publisher {
    out: Box<dyn Write>,
    published: usize,
}

impl Publisher {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out, published: 0 }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn to_file(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("creating output file {}", path.display()))?;
        Ok(Self::new(Box::new(BufWriter::new(file))))
    }

    pub fn publish(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let line = serde_json::to_string(frame).context("serializing frame")?;
        writeln!(self.out, "{line}").context("writing frame")?;
        self.published += 1;
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        info!("[replay] {}", message);
    }

    #[cfg(test)]
    pub fn published(&self) -> usize {
        self.published
    }

    pub fn finish(mut self) -> anyhow::Result<usize> {
        self.out.flush().context("flushing output")?;
        Ok(self.published)
    }
}
