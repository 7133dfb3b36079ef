use super::reader::Reader;
use super::record::Record;

use std::error::Error;
use std::io;

/// Drain `rdr` and return its records sorted ascending by key bytes.
///
/// This is the in-process replacement for `sort -t '\t' -k N,N`: the
/// comparison is bounded to the key field and byte-wise. The sort is
/// stable, so records with equal keys keep their input order, which fixes
/// the tie-break order of the join output.
pub fn read_sorted<R: io::Read>(
    rdr: &mut Reader<R>,
    key_idx: usize,
) -> Result<Vec<Record>, Box<dyn Error>> {
    let mut run = Vec::new();
    loop {
        let mut rec = Record::new(key_idx);
        if !rdr.read_record(&mut rec)? {
            break;
        }
        run.push(rec);
    }
    run.sort_by(|a, b| a.cmp_key(b));
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::read_sorted;
    use reader::ReaderBuilder;

    // reads with the key on the first field, payload on the second
    fn keys_and_payloads(data: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut rdr = ReaderBuilder::default().from_reader(data.as_bytes());
        let run = read_sorted(&mut rdr, 0).unwrap();
        run.iter()
            .map(|r| (r.key().to_vec(), r.get_field(1).unwrap_or(b"").to_vec()))
            .collect()
    }

    #[test]
    fn sorts_by_key_bytes() {
        let data = "b\t1\na\t2\nc\t3\n";
        let got = keys_and_payloads(data);
        let keys: Vec<&[u8]> = got.iter().map(|(k, _)| &k[..]).collect();
        assert_eq!(keys, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }

    #[test]
    fn byte_order_not_numeric() {
        // lexicographic like sort(1) without -n: "10" < "9"
        let data = "9\tx\n10\ty\n";
        let got = keys_and_payloads(data);
        assert_eq!(got[0].0, b"10".to_vec());
        assert_eq!(got[1].0, b"9".to_vec());
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let data = "k\tfirst\na\tzero\nk\tsecond\nk\tthird\n";
        let got = keys_and_payloads(data);
        assert_eq!(
            got,
            vec![
                (b"a".to_vec(), b"zero".to_vec()),
                (b"k".to_vec(), b"first".to_vec()),
                (b"k".to_vec(), b"second".to_vec()),
                (b"k".to_vec(), b"third".to_vec()),
            ]
        );
    }

    #[test]
    fn sorts_on_second_field() {
        let data = "x\tb\ny\ta\n";
        let mut rdr = ReaderBuilder::default().from_reader(data.as_bytes());
        let run = read_sorted(&mut rdr, 1).unwrap();
        assert_eq!(run[0].key(), &b"a"[..]);
        assert_eq!(run[1].key(), &b"b"[..]);
    }

    #[test]
    fn missing_key_sorts_first() {
        let data = "b\tx\nonly\n";
        let mut rdr = ReaderBuilder::default().from_reader(data.as_bytes());
        let run = read_sorted(&mut rdr, 1).unwrap();
        assert_eq!(run[0].key(), &b""[..]);
        assert_eq!(run[1].key(), &b"x"[..]);
    }
}
