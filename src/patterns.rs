//! Handshake pattern catalogue
//!
//! Message patterns for the handshakes documented on the protocol pages,
//! following section 7 of the Noise protocol framework. Each pattern is a
//! list of pre-messages (keys known before the handshake starts) and a list
//! of messages exchanged during the handshake.

use std::fmt;

/// A single handshake token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    E,
    S,
    Ee,
    Es,
    Se,
    Ss,
    Psk,
}

impl Token {
    pub fn as_str(self) -> &'static str {
        match self {
            Token::E => "e",
            Token::S => "s",
            Token::Ee => "ee",
            Token::Es => "es",
            Token::Se => "se",
            Token::Ss => "ss",
            Token::Psk => "psk",
        }
    }
}

/// Who sends a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Initiator to responder
    Outbound,
    /// Responder to initiator
    Inbound,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Outbound => "->",
            Direction::Inbound => "<-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePattern {
    pub direction: Direction,
    pub tokens: &'static [Token],
}

impl fmt::Display for MessagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction.arrow())?;
        for (i, token) in self.tokens.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, token.as_str())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakePattern {
    pub name: &'static str,
    pub description: &'static str,
    pub pre_messages: &'static [MessagePattern],
    pub messages: &'static [MessagePattern],
}

impl HandshakePattern {
    /// Whether the responder can send anything back
    pub fn is_one_way(&self) -> bool {
        self.messages
            .iter()
            .all(|m| m.direction == Direction::Outbound)
    }

    /// Pattern notation, one message per line, pre-messages above `...`
    pub fn notation(&self) -> String {
        let mut lines = Vec::with_capacity(self.pre_messages.len() + self.messages.len() + 1);
        lines.push(format!("{}():", self.name));
        if !self.pre_messages.is_empty() {
            lines.extend(self.pre_messages.iter().map(|m| format!("  {}", m)));
            lines.push("  ...".to_string());
        }
        lines.extend(self.messages.iter().map(|m| format!("  {}", m)));
        lines.join("\n")
    }
}

use Direction::{Inbound, Outbound};
use Token::{E, Ee, Es, Psk, S, Se, Ss};

const fn msg(direction: Direction, tokens: &'static [Token]) -> MessagePattern {
    MessagePattern { direction, tokens }
}

pub const NOISE_N: HandshakePattern = HandshakePattern {
    name: "N",
    description: "A one-way pattern where a client can send data to a server with a known \
                  static key. The server can only receive data and cannot reply back.",
    pre_messages: &[msg(Inbound, &[S])],
    messages: &[msg(Outbound, &[E, Es])],
};

pub const NOISE_K: HandshakePattern = HandshakePattern {
    name: "K",
    description: "A one-way pattern where a client can send data to a server with a known \
                  static key. The server can only receive data and cannot reply back. The \
                  server authenticates the client via a known key.",
    pre_messages: &[msg(Outbound, &[S]), msg(Inbound, &[S])],
    messages: &[msg(Outbound, &[E, Es, Ss])],
};

pub const NOISE_X: HandshakePattern = HandshakePattern {
    name: "X",
    description: "A one-way pattern where a client can send data to a server with a known \
                  static key. The server can only receive data and cannot reply back. The \
                  server authenticates the client via a key transmitted as part of the \
                  handshake.",
    pre_messages: &[msg(Inbound, &[S])],
    messages: &[msg(Outbound, &[E, Es, S, Ss])],
};

pub const NOISE_KK: HandshakePattern = HandshakePattern {
    name: "KK",
    description: "Both the client static key and the server static key are known in advance.",
    pre_messages: &[msg(Outbound, &[S]), msg(Inbound, &[S])],
    messages: &[msg(Outbound, &[E, Es, Ss]), msg(Inbound, &[E, Ee, Se])],
};

pub const NOISE_NX: HandshakePattern = HandshakePattern {
    name: "NX",
    description: "An HTTPS-like pattern where the client is not authenticated and the \
                  static public key of the server is transmitted during the handshake. The \
                  client is responsible for validating the received key.",
    pre_messages: &[],
    messages: &[msg(Outbound, &[E]), msg(Inbound, &[E, Ee, S, Es])],
};

pub const NOISE_NK: HandshakePattern = HandshakePattern {
    name: "NK",
    description: "A public-key-pinning-like pattern where the client is not authenticated \
                  and the static public key of the server is already known.",
    pre_messages: &[msg(Inbound, &[S])],
    messages: &[msg(Outbound, &[E, Es]), msg(Inbound, &[E, Ee])],
};

pub const NOISE_XX: HandshakePattern = HandshakePattern {
    name: "XX",
    description: "Both static keys are transmitted during the handshake. The server and \
                  the client are each responsible for validating the received key.",
    pre_messages: &[],
    messages: &[
        msg(Outbound, &[E]),
        msg(Inbound, &[E, Ee, S, Es]),
        msg(Outbound, &[S, Se]),
    ],
};

pub const NOISE_KX: HandshakePattern = HandshakePattern {
    name: "KX",
    description: "The client static key is known to the server, and the server static \
                  key is transmitted during the handshake.",
    pre_messages: &[msg(Outbound, &[S])],
    messages: &[msg(Outbound, &[E]), msg(Inbound, &[E, Ee, Se, S, Es])],
};

pub const NOISE_XK: HandshakePattern = HandshakePattern {
    name: "XK",
    description: "The server static key is known to the client, and the client static \
                  key is transmitted in the last message of the handshake.",
    pre_messages: &[msg(Inbound, &[S])],
    messages: &[
        msg(Outbound, &[E, Es]),
        msg(Inbound, &[E, Ee]),
        msg(Outbound, &[S, Se]),
    ],
};

pub const NOISE_NNPSK2: HandshakePattern = HandshakePattern {
    name: "NNpsk2",
    description: "Neither side is authenticated by a static key. Both peers share a \
                  pre-shared key which is mixed in at the end of the second message.",
    pre_messages: &[],
    messages: &[msg(Outbound, &[E]), msg(Inbound, &[E, Ee, Psk])],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_display() {
        assert_eq!(msg(Outbound, &[E, Es, Ss]).to_string(), "-> e, es, ss");
        assert_eq!(msg(Inbound, &[S]).to_string(), "<- s");
        assert_eq!(msg(Outbound, &[]).to_string(), "->");
    }

    #[test]
    fn test_notation_with_pre_messages() {
        let expected = "XK():\n  <- s\n  ...\n  -> e, es\n  <- e, ee\n  -> s, se";
        assert_eq!(NOISE_XK.notation(), expected);
    }

    #[test]
    fn test_notation_without_pre_messages() {
        assert_eq!(NOISE_NNPSK2.notation(), "NNpsk2():\n  -> e\n  <- e, ee, psk");
    }

    #[test]
    fn test_one_way_patterns() {
        for pattern in [NOISE_N, NOISE_K, NOISE_X] {
            assert!(pattern.is_one_way(), "{} should be one-way", pattern.name);
        }
        for pattern in [NOISE_KK, NOISE_NK, NOISE_NX, NOISE_KX, NOISE_XK, NOISE_XX, NOISE_NNPSK2] {
            assert!(!pattern.is_one_way(), "{} should be interactive", pattern.name);
        }
    }
}
