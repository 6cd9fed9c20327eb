use {
  std::io,
  tokio::{
    io::{
      stdin,
      stdout,
      AsyncBufRead,
      AsyncBufReadExt,
      AsyncWriteExt,
      BufReader,
      Lines,
      Stdin,
    },
    sync::Mutex,
  },
};

/// Line oriented terminal input shared by the command loop and
/// the wallet, so that only one of them reads a line at a time.
pub struct Console<R = BufReader<Stdin>> {
  lines: Mutex<Lines<R>>,
}

impl Console {
  pub fn stdin() -> Self {
    Self::from_reader(BufReader::new(stdin()))
  }
}

impl<R: AsyncBufRead + Unpin> Console<R> {
  pub fn from_reader(reader: R) -> Self {
    Self {
      lines: Mutex::new(reader.lines()),
    }
  }

  /// Prints `question` and waits for the answer.
  ///
  /// Returns `None` once input is closed.
  pub async fn prompt(&self, question: &str) -> io::Result<Option<String>> {
    let mut lines = self.lines.lock().await;

    let mut out = stdout();
    out.write_all(question.as_bytes()).await?;
    out.flush().await?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_owned()))
  }
}
