use crate::criteria::Criteria;
use crate::error::VerifyError;
use crate::hash::{hash_bytes, HexEncode};
use serde::{Deserialize, Serialize};

/// A solved challenge: the data, the nonce that was appended to it and the
/// resulting digest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub data: String,
    /// Decimal form of the nonce
    pub added_value: String,
    /// Lowercase hex SHA-256 of `data` followed by `added_value`
    pub hash: String,
}

impl Solution {
    pub fn nonce(&self) -> Result<u64, VerifyError> {
        self.added_value
            .parse()
            .map_err(|_| VerifyError::InvalidAddedValue(self.added_value.clone()))
    }

    /// Checks the solution against `criteria`, cheapest check first.
    pub fn verify(&self, criteria: &Criteria) -> Result<(), VerifyError> {
        if !criteria.is_met_by_hex(&self.hash) {
            return Err(VerifyError::InvalidDifficulty);
        }
        let probe = format!("{}{}", self.data, self.added_value);
        if hash_bytes(probe.as_bytes()).encode_hex() != self.hash {
            return Err(VerifyError::InvalidHash);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::criteria::Criteria;
    use crate::error::VerifyError;
    use crate::solution::Solution;

    fn abc_solution() -> Solution {
        Solution {
            data: "abc".to_string(),
            added_value: "462".to_string(),
            hash: "aba7415c5511db21e95e34fa4e9a626b6b7b4a5dfac0e1caff4a59f8c198b384".to_string(),
        }
    }

    #[test]
    fn test_valid() {
        let criteria = Criteria::new("ab").unwrap();
        assert_eq!(abc_solution().verify(&criteria), Ok(()));
        assert_eq!(abc_solution().nonce(), Ok(462));
    }

    #[test]
    fn test_invalid_difficulty() {
        let criteria = Criteria::new("0000").unwrap();
        assert_eq!(
            abc_solution().verify(&criteria),
            Err(VerifyError::InvalidDifficulty)
        );
    }

    #[test]
    fn test_invalid_hash() {
        let criteria = Criteria::new("ab").unwrap();
        let tampered = Solution {
            added_value: "463".to_string(),
            ..abc_solution()
        };
        assert_eq!(tampered.verify(&criteria), Err(VerifyError::InvalidHash));

        // right prefix, wrong tail
        let forged = Solution {
            hash: format!("ab{}", "0".repeat(62)),
            ..abc_solution()
        };
        assert_eq!(forged.verify(&criteria), Err(VerifyError::InvalidHash));
    }

    #[test]
    fn test_invalid_added_value() {
        let solution = Solution {
            added_value: "-1".to_string(),
            ..abc_solution()
        };
        assert_eq!(
            solution.nonce(),
            Err(VerifyError::InvalidAddedValue("-1".to_string()))
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(abc_solution()).unwrap();
        assert_eq!(json["data"], "abc");
        assert_eq!(json["addedValue"], "462");
        assert_eq!(
            json["hash"],
            "aba7415c5511db21e95e34fa4e9a626b6b7b4a5dfac0e1caff4a59f8c198b384"
        );
        let back: Solution = serde_json::from_value(json).unwrap();
        assert_eq!(back, abc_solution());
    }
}
