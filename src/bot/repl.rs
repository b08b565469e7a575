//! The interactive read-eval-print loop.

use super::command::parse_input;
use super::handlers::execute;
use crate::error::{CommandError, StoreResult};
use crate::repositories::BookStore;
use crate::services::{ContactService, ContactServiceImpl};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

/// An assistant bot session: a contact service plus the store it is saved to.
#[derive(Debug)]
pub struct Bot<C, S> {
    service: C,
    store: S,
}

impl<S: BookStore> Bot<ContactServiceImpl, S> {
    /// Start a session from whatever `store` holds.
    pub async fn load(store: S) -> StoreResult<Self> {
        let book = store.load().await?;
        Ok(Self::new(ContactServiceImpl::new(book), store))
    }
}

impl<C: ContactService, S: BookStore> Bot<C, S> {
    pub fn new(service: C, store: S) -> Self {
        Self { service, store }
    }

    pub fn service(&self) -> &C {
        &self.service
    }

    /// Run the conversation until `close`/`exit` or end of input.
    ///
    /// Commands are handled strictly one after another. The book is saved
    /// once when the session ends, whichever way it ends: a failure on the
    /// input or output stream stops the conversation but is only returned
    /// after the save has been attempted.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let conversation = self.converse(input, output).await;
        if let Err(e) = &conversation {
            warn!(error = %e, "Conversation ended by I/O failure");
        }

        let saved = self
            .store
            .save(self.service.list_all())
            .await
            .context("Failed to save address book");

        conversation?;
        saved
    }

    async fn converse<R, W>(&mut self, mut input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        write_line(output, WELCOME).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read command")?;
            if read == 0 {
                info!("Input closed, ending session");
                write_line(output, "").await?;
                write_line(output, "Good bye!").await?;
                return Ok(());
            }

            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| CommandError::InvalidEncoding)
                .and_then(parse_input);

            let command = match parsed {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    debug!(%e, "Unparsable input");
                    write_line(output, &e.to_string()).await?;
                    continue;
                }
            };

            let reply = execute(&mut self.service, command);
            write_line(output, &reply.text).await?;
            if reply.exit {
                return Ok(());
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
