//! 控制台输入输出
//!
//! 按空白分隔读取整数，非数字输入提示错误后重试。

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};

/// 非法输入提示
pub const INPUT_ERROR_MESSAGE: &str = "Invalid Input.";

/// 控制台
pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    /// 当前行中尚未消费的词
    pending: VecDeque<String>,
}

impl Console {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// 标准输入输出
    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    /// 输出一行
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("写入控制台失败")
    }

    /// 输出提示（不换行）
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text).context("写入控制台失败")?;
        self.output.flush().context("写入控制台失败")
    }

    /// 读取下一个整数；输入无效时提示并重试，重试前重新显示 `retry_prompt`
    pub fn read_int(&mut self, retry_prompt: Option<&str>) -> Result<i64> {
        loop {
            let token = self.next_token()?;
            match token.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    self.say(INPUT_ERROR_MESSAGE)?;
                    if let Some(prompt) = retry_prompt {
                        self.prompt(prompt)?;
                    }
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self.input.read_line(&mut line).context("读取输入失败")?;
            if read == 0 {
                bail!("输入已结束");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) fn scripted(input: &str) -> Console {
        Console::new(Box::new(Cursor::new(input.to_string())), Box::new(std::io::sink()))
    }

    #[test]
    fn test_reads_tokens_across_lines() {
        let mut console = scripted("1 2\n\n  3\n");
        assert_eq!(console.read_int(None).unwrap(), 1);
        assert_eq!(console.read_int(None).unwrap(), 2);
        assert_eq!(console.read_int(None).unwrap(), 3);
    }

    #[test]
    fn test_skips_invalid_tokens() {
        let mut console = scripted("abc 2.5\n-4\n");
        assert_eq!(console.read_int(Some("> ")).unwrap(), -4);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut console = scripted("x\n");
        assert!(console.read_int(None).is_err());
    }
}
