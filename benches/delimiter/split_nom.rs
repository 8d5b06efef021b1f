use nom::bytes::complete::{tag, take_till};
use nom::IResult;

fn field(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == ',')(input)
}

fn comma(input: &str) -> IResult<&str, &str> {
    tag(",")(input)
}

pub fn nom_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        let (r, f) = field(rest).unwrap();
        fields.push(f);
        match comma(r) {
            Ok((r2, _)) => rest = r2,
            Err(_) => return fields,
        }
    }
}
