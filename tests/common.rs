#![cfg(feature = "std")]

use csv::ReaderBuilder;
use hexcodec::{
    avec::{self, HexDecoder, HexEncoder},
    dialect::{
        DelimitedEncoder, PermissiveDecoder, StrictDecoder, WhitespaceDecoder, standard,
    },
};

const PATH: &str = "fixtures/vectors.csv";

#[test]
fn golden_vectors_slice() {
    for vector in vectors() {
        let result = match vector.operation.as_str() {
            "encode" => Ok(encode(&vector.dialect, &vector.bytes()).into_bytes()),
            "decode" => decode(&vector.dialect, &vector.text),
            op => panic!("unknown operation {op}"),
        };

        vector.check(result);
    }
}

#[test]
fn golden_vectors_reader() {
    for vector in vectors().into_iter().filter(|v| v.operation == "decode") {
        let mut out = Vec::new();
        let result = decode_reader(&vector.dialect, vector.text.as_bytes(), &mut out)
            .map(|_| out)
            .map_err(|err| match err {
                avec::reader::Error::Syntax(err) => err.position(),
                err => panic!("unexpected error {err}"),
            });

        vector.check(result);
    }
}

fn encode(dialect: &str, b: &[u8]) -> String {
    match dialect {
        "plain" => standard::STRICT.encode(b),
        "simple" => standard::SIMPLE.encode(b),
        "delimited" => DelimitedEncoder::with_bytes_per_line(4).unwrap().encode(b),
        _ => panic!("unknown encoder {dialect}"),
    }
}

fn decode(dialect: &str, s: &str) -> Result<Vec<u8>, u64> {
    let result = match dialect {
        "strict" => StrictDecoder.decode(s),
        "default" => standard::DEFAULT.decode(s),
        "whitespace" => WhitespaceDecoder.decode(s),
        "permissive" => PermissiveDecoder.decode(s),
        _ => panic!("unknown decoder {dialect}"),
    };

    result.map_err(|err| err.position())
}

fn decode_reader(dialect: &str, mut r: &[u8], w: &mut Vec<u8>) -> Result<u64, avec::reader::Error> {
    match dialect {
        "strict" => avec::decode_reader(&mut r, w, &StrictDecoder),
        "default" => avec::decode_reader(&mut r, w, &standard::DEFAULT),
        "whitespace" => avec::decode_reader(&mut r, w, &WhitespaceDecoder),
        "permissive" => avec::decode_reader(&mut r, w, &PermissiveDecoder),
        _ => panic!("unknown decoder {dialect}"),
    }
}

struct Vector {
    operation: String,
    dialect: String,
    text: String,
    expected: String,
}

impl Vector {
    fn bytes(&self) -> Vec<u8> {
        parse_hex(&self.expected)
    }

    fn check(&self, result: Result<Vec<u8>, u64>) {
        let Self {
            operation,
            dialect,
            text,
            expected,
        } = self;

        match (operation.as_str(), expected.strip_prefix("error@")) {
            ("encode", _) => assert_eq!(result.unwrap(), text.as_bytes(), "{dialect}: {expected}"),
            (_, Some(position)) => {
                assert_eq!(result, Err(position.parse().unwrap()), "{dialect}: {text:?}")
            }
            (_, None) => assert_eq!(result, Ok(self.bytes()), "{dialect}: {text:?}"),
        }
    }
}

fn vectors() -> Vec<Vector> {
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    let vectors: Vec<Vector> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            Vector {
                operation: r[0].to_string(),
                dialect: r[1].to_string(),
                text: r[2].to_string(),
                expected: r[3].to_string(),
            }
        })
        .collect();

    assert!(!vectors.is_empty());
    vectors
}

/// Parse continuous hex without going through the crate under test.
fn parse_hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
