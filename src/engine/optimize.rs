//! Verify-and-rewrite pass over LZO1X/LZO1Y streams.

use super::{
    lzo1x::{self, Compressor, Variant},
    Encoder, Fault, Status, Token,
};

/// Decodes `src`, which must decode to at most `capacity` bytes, and
/// re-encodes it with every match that does not pay for itself turned
/// back into literals.
///
/// Returns the stream to keep (the rewrite if it is not larger than `src`,
/// otherwise `src` itself) and the decoded length.
pub(crate) fn optimize(variant: Variant, src: &[u8], capacity: usize) -> Status<(Vec<u8>, usize)> {
    let mut plain = vec![0u8; capacity];
    let mut tokens: Vec<Token> = Vec::new();
    let len = lzo1x::decompress(variant, src, &mut plain, &mut tokens)?;
    plain.truncate(len);

    let mut out = vec![0u8; len + len / 16 + 64 + 3];
    let mut enc = Compressor::new(variant, &mut out);
    let mut anchor = 0;
    let mut pos = 0;
    for token in tokens {
        match token {
            Token::Literals(n) => pos += n,
            Token::Match { distance, len } if enc.worthwhile(distance, len) => {
                enc.literals(&plain[anchor..pos])?;
                enc.matched(distance, len)?;
                pos += len;
                anchor = pos;
            }
            Token::Match { len, .. } => pos += len,
        }
    }
    enc.literals(&plain[anchor..pos])?;
    let out_len = enc.finish()?;
    out.truncate(out_len);

    if out.len() > src.len() {
        return Ok((src.to_vec(), len));
    }

    let mut check = vec![0u8; len];
    let check_len = lzo1x::decompress(variant, &out, &mut check, &mut ())?;
    if check_len != len || check != plain {
        return Err(Fault::Error);
    }
    Ok((out, len))
}
