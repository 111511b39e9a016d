//! HTTP Digest authentication (RFC 7616).
//!
//! Supports MD5 (the default when a challenge names no algorithm), SHA-256
//! and SHA-512/256, each with its `-sess` variant, under `qop=auth` or the
//! legacy no-qop form.

use std::collections::HashMap;
use std::fmt::Write;

use md5::{Digest, Md5};
use ring::digest;

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("not a digest challenge")]
    NotDigest,
    #[error("challenge is missing `{0}`")]
    MissingParam(&'static str),
    #[error("unsupported digest algorithm `{0}`")]
    UnsupportedAlgorithm(String),
    #[error("unsupported qop `{0}`")]
    UnsupportedQop(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Md5,
    Md5Sess,
    Sha256,
    Sha256Sess,
    Sha512_256,
    Sha512_256Sess,
}

impl Algorithm {
    fn parse(value: &str) -> Result<Self, ChallengeError> {
        match value.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "MD5-SESS" => Ok(Algorithm::Md5Sess),
            "SHA-256" => Ok(Algorithm::Sha256),
            "SHA-256-SESS" => Ok(Algorithm::Sha256Sess),
            "SHA-512-256" => Ok(Algorithm::Sha512_256),
            "SHA-512-256-SESS" => Ok(Algorithm::Sha512_256Sess),
            _ => Err(ChallengeError::UnsupportedAlgorithm(value.to_owned())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Md5Sess => "MD5-sess",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha256Sess => "SHA-256-sess",
            Algorithm::Sha512_256 => "SHA-512-256",
            Algorithm::Sha512_256Sess => "SHA-512-256-sess",
        }
    }

    fn is_session(self) -> bool {
        matches!(
            self,
            Algorithm::Md5Sess | Algorithm::Sha256Sess | Algorithm::Sha512_256Sess
        )
    }

    fn hash(self, data: &str) -> String {
        let algorithm = match self {
            Algorithm::Md5 | Algorithm::Md5Sess => {
                return hex(Md5::digest(data.as_bytes()).as_slice());
            }
            Algorithm::Sha256 | Algorithm::Sha256Sess => &digest::SHA256,
            Algorithm::Sha512_256 | Algorithm::Sha512_256Sess => &digest::SHA512_256,
        };
        hex(digest::digest(algorithm, data.as_bytes()).as_ref())
    }
}

/// A parsed `WWW-Authenticate: Digest ...` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    realm: String,
    nonce: String,
    opaque: Option<String>,
    algorithm: Algorithm,
    qop_auth: bool,
}

impl Challenge {
    pub fn parse(header: &str) -> Result<Self, ChallengeError> {
        let header = header.trim_start();
        let rest = header
            .get(..6)
            .filter(|scheme| scheme.eq_ignore_ascii_case("digest"))
            .map(|_| &header[6..])
            .ok_or(ChallengeError::NotDigest)?;
        let mut params = parse_params(rest);

        let realm = params
            .remove("realm")
            .ok_or(ChallengeError::MissingParam("realm"))?;
        let nonce = params
            .remove("nonce")
            .ok_or(ChallengeError::MissingParam("nonce"))?;
        // absent algorithm means MD5 (RFC 7616 section 3.3)
        let algorithm = Algorithm::parse(params.get("algorithm").map_or("MD5", String::as_str))?;

        let qop_auth = match params.get("qop") {
            None => false,
            Some(qop) => {
                if qop.split(',').any(|q| q.trim().eq_ignore_ascii_case("auth")) {
                    true
                } else {
                    return Err(ChallengeError::UnsupportedQop(qop.clone()));
                }
            }
        };

        Ok(Self {
            realm,
            nonce,
            opaque: params.remove("opaque"),
            algorithm,
            qop_auth,
        })
    }

    /// Compute the `Authorization` header value for one request.
    ///
    /// `nc` is the nonce count for this nonce, starting at 1.
    pub fn authorization(
        &self,
        username: &str,
        password: &str,
        method: &str,
        uri: &str,
        nc: u32,
        cnonce: &str,
    ) -> String {
        let alg = self.algorithm;
        let nc = format!("{nc:08x}");

        let mut ha1 = alg.hash(&format!("{username}:{}:{password}", self.realm));
        if alg.is_session() {
            ha1 = alg.hash(&format!("{ha1}:{}:{cnonce}", self.nonce));
        }
        let ha2 = alg.hash(&format!("{method}:{uri}"));
        let response = if self.qop_auth {
            alg.hash(&format!("{ha1}:{}:{nc}:{cnonce}:auth:{ha2}", self.nonce))
        } else {
            alg.hash(&format!("{ha1}:{}:{ha2}", self.nonce))
        };

        let mut header = format!(
            r#"Digest username="{}", realm="{}", nonce="{}", uri="{}", algorithm={}, response="{}""#,
            quote(username),
            quote(&self.realm),
            quote(&self.nonce),
            quote(uri),
            alg.name(),
            response,
        );
        if self.qop_auth {
            let _ = write!(header, r#", qop=auth, nc={nc}, cnonce="{}""#, quote(cnonce));
        }
        if let Some(opaque) = &self.opaque {
            let _ = write!(header, r#", opaque="{}""#, quote(opaque));
        }
        header
    }
}

/// Cached challenge plus the nonce count already spent on it.
#[derive(Debug)]
pub struct Session {
    challenge: Challenge,
    nc: u32,
}

impl Session {
    pub fn new(challenge: Challenge) -> Self {
        Self { challenge, nc: 0 }
    }

    pub fn authorize(&mut self, username: &str, password: &str, method: &str, uri: &str) -> String {
        self.nc += 1;
        let cnonce = format!("{:016x}", rand::random::<u64>());
        self.challenge
            .authorization(username, password, method, uri, self.nc, &cnonce)
    }
}

fn parse_params(input: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}

        let key: String = chars.by_ref().take_while(|c| *c != '=').collect();
        let key = key.trim().to_ascii_lowercase();
        if key.is_empty() {
            break;
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        if chars.next_if_eq(&'"').is_some() {
            while let Some(c) = chars.next() {
                match c {
                    '\\' => value.extend(chars.next()),
                    '"' => break,
                    c => value.push(c),
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| *c != ',') {
                value.push(c);
            }
            value.truncate(value.trim_end().len());
        }
        params.insert(key, value);
    }
    params
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
