//! The "convert literals" editor command.
//!
//! One invocation checks the buffer's content type, resolves the selections (falling back to
//! the whole buffer) and runs the literal transform over each of them. Coordinates are
//! UTF-16 code units, as reported by the editor host.

mod config;
mod content_type;
mod error;

use splice::{LineBuffer, Selection, SpliceSummary, TextTransform};
use tracing::debug;

pub use config::{CommandConfig, PLAYGROUND, SWIFT_SOURCE};
pub use content_type::ensure_supported;
pub use error::CommandError;
pub use splice;

/// Everything the host hands over for one command run.
pub struct Invocation<'a, B: LineBuffer + ?Sized> {
    pub buffer: &'a mut B,
    /// Selections as reported by the host, in its order.
    pub selections: &'a [Selection],
    /// Uniform type identifier of the buffer's content.
    pub content_type: &'a str,
}

/// Converts literals in the selected text of a buffer.
#[derive(Debug, Clone, Default)]
pub struct ConvertCommand {
    config: CommandConfig,
}

impl ConvertCommand {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    /// Runs the command. Either every selection is converted, or an error is returned and the
    /// buffer is untouched.
    pub fn perform<B, T>(
        &self,
        invocation: Invocation<'_, B>,
        transform: &mut T,
    ) -> Result<SpliceSummary, CommandError>
    where
        B: LineBuffer + ?Sized,
        T: TextTransform + ?Sized,
    {
        let Invocation {
            buffer,
            selections,
            content_type,
        } = invocation;

        // 1) Refuse unsupported content types.
        ensure_supported(content_type, &self.config)?;

        // 2) No selection or a bare caret means the whole buffer.
        let selections = splice::effective_selections(selections, &*buffer);

        // 3) Transform and splice, last selection first.
        let summary = splice::apply_transform(buffer, &selections, transform)?;

        debug!(
            content_type,
            selections = summary.selections,
            line_delta = summary.line_delta,
            "converted selections"
        );
        Ok(summary)
    }
}

/// [`ConvertCommand::perform`] with the default config.
pub fn convert<B, T>(
    buffer: &mut B,
    selections: &[Selection],
    content_type: &str,
    transform: &mut T,
) -> Result<SpliceSummary, CommandError>
where
    B: LineBuffer + ?Sized,
    T: TextTransform + ?Sized,
{
    ConvertCommand::default().perform(
        Invocation {
            buffer,
            selections,
            content_type,
        },
        transform,
    )
}
