use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    app::util::time, auth::jwt::models::claims::Claims, store::models::resource_id::ResourceId,
};

pub fn sign_jwt(
    user_id: &ResourceId,
    secret: &str,
    exp_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = time::current_time_in_secs();

    let claims = Claims {
        id: user_id.to_string(),
        iat,
        exp: iat + exp_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn decode_jwt(jwt: &str, secret: &str) -> Result<Claims, ErrorKind> {
    let result = decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    );

    match result {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(e.kind().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_decodes_with_same_secret() {
        let token = sign_jwt(&ResourceId::Number(7), "secret", 60).unwrap();
        let claims = decode_jwt(&token, "secret").unwrap();

        assert_eq!(claims.id, "7");
        assert_eq!(claims.exp, claims.iat + 60);
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = sign_jwt(&ResourceId::Number(7), "secret", 60).unwrap();

        assert_eq!(
            decode_jwt(&token, "other").unwrap_err(),
            ErrorKind::InvalidSignature
        );
    }
}
