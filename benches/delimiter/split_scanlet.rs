use scanlet::prelude::*;

pub fn scanlet_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut cur: &str = line;
    loop {
        let next = cur.scan_while_excluding(|c: &str| c.scan(','));
        fields.push(&cur[..cur.len() - next.len()]);
        let after = next.scan(',');
        if after == next {
            return fields;
        }
        cur = after;
    }
}
