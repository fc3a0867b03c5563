use std::rc::Rc;

use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// A pattern handler either produces the next token or, for skipped input
/// such as whitespace, advances the cursor and yields nothing.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// On-demand tokenizer over an in-memory source string.
///
/// Each call to [`Lexer::next_token`] classifies the input at the cursor
/// against an ordered pattern table and emits exactly one token. The lexer
/// never fails: unrecognized characters come back as `Illegal` tokens, and
/// once the cursor reaches end of input every further call returns `Eof`.
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("repl"))
        };

        Lexer {
            pos: 0,
            // Two-character operators are listed before their one-character
            // prefixes so `==` and `!=` win over `=` and `!`.
            patterns: vec![
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_]+").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBracket, "]") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_here(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Produces the next token from the cursor position.
    ///
    /// Calling again after `Eof` keeps returning `Eof`; the cursor never
    /// advances past the end of input.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::Eof, String::new(), self.span_here(0));
            }

            let mut hit: Option<(Regex, RegexHandler)> = None;
            for pattern in self.patterns.iter() {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        hit = Some((pattern.regex.clone(), pattern.handler));
                        break;
                    }
                }
            }

            match hit {
                Some((regex, handler)) => {
                    if let Some(token) = handler(self, &regex) {
                        return token;
                    }
                    // Skipped input (whitespace); classify again.
                }
                None => {
                    let ch = match self.remainder().chars().next() {
                        Some(ch) => ch,
                        None => continue,
                    };
                    let token =
                        MK_TOKEN!(TokenKind::Illegal, ch.to_string(), self.span_here(ch.len_utf8()));
                    self.advance_n(ch.len_utf8());
                    return token;
                }
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).map(|m| m.end()).unwrap_or(0);
    lexer.advance_n(matched);
    None
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();

    let token = MK_TOKEN!(TokenKind::Int, matched.clone(), lexer.span_here(matched.len()));
    lexer.advance_n(matched.len());
    Some(token)
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?;
    // The literal is the inner text; both quotes are consumed.
    let literal = matched.as_str()[1..matched.end() - 1].to_string();

    let token = MK_TOKEN!(TokenKind::String, literal, lexer.span_here(matched.end()));
    lexer.advance_n(matched.end());
    Some(token)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    let kind = lookup_identifier(&matched);

    let token = MK_TOKEN!(kind, matched.clone(), lexer.span_here(matched.len()));
    lexer.advance_n(matched.len());
    Some(token)
}
