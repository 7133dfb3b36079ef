use std::cmp;
use std::ops::Range;

/// A single input line split on the field delimiter.
///
/// The field bytes live in one flat buffer; `bounds` holds the end offset of
/// each field. The key is a borrowed view into the buffer, not a copy.
#[derive(Debug, Eq, PartialEq)]
pub struct Record {
    fields: Vec<u8>,
    bounds: Bounds,
    // 0-based index of the join key field
    key_idx: usize,
}

impl Record {
    pub fn new(key_idx: usize) -> Self {
        Record {
            fields: Vec::new(),
            bounds: Bounds::with_capacity(0),
            key_idx: key_idx,
        }
    }

    #[inline]
    pub fn load(&mut self, fields: &[u8], ends: &[usize]) {
        self.clear();
        self.fields.extend_from_slice(fields);
        self.bounds.ends.extend_from_slice(ends);
    }

    #[inline]
    pub fn fields_mut(&mut self) -> (&mut [u8], &mut [usize]) {
        (&mut self.fields, &mut self.bounds.ends)
    }

    #[inline]
    pub fn expand_fields(&mut self) {
        let new_len = self.fields.len().checked_mul(2).unwrap();
        self.fields.resize(cmp::max(4, new_len), 0);
    }

    #[inline]
    pub fn expand_bounds(&mut self) {
        self.bounds.expand();
    }

    #[inline]
    pub fn set_len(&mut self, len: usize) {
        self.bounds.ends.resize(len, 0);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
        self.bounds.clear();
    }

    /// The number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.ends.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.ends.is_empty()
    }

    /// A record parsed from a blank line: one field, zero bytes.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.len() == 1 && self.get_field(0) == Some(&b""[..])
    }

    #[inline]
    pub fn key_idx(&self) -> usize {
        self.key_idx
    }

    #[inline]
    pub fn get_field(&self, i: usize) -> Option<&[u8]> {
        self.bounds.get(i).map(|r| &self.fields[r])
    }

    /// The join key bytes. A record too short to have the key field joins
    /// on an empty key, the way `sort`/`join` treat an absent field.
    #[inline]
    pub fn key(&self) -> &[u8] {
        self.get_field(self.key_idx).unwrap_or(b"")
    }

    #[inline]
    pub fn cmp_key(&self, other: &Record) -> cmp::Ordering {
        self.key().cmp(other.key())
    }

    /// All fields except the key, in natural order.
    #[inline]
    pub fn non_key_fields<'a>(&'a self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let key_idx = self.key_idx;
        (0..self.len())
            .filter(move |&i| i != key_idx)
            .filter_map(move |i| self.get_field(i))
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Bounds {
    ends: Vec<usize>,
}

impl Bounds {
    #[inline]
    fn with_capacity(cap: usize) -> Self {
        Bounds {
            ends: Vec::with_capacity(cap),
        }
    }

    #[inline]
    fn expand(&mut self) {
        let new_len = self.ends.len().checked_mul(2).unwrap();
        self.ends.resize(cmp::max(4, new_len), 0);
    }

    #[inline]
    fn clear(&mut self) {
        self.ends.clear();
    }

    #[inline]
    fn get(&self, i: usize) -> Option<Range<usize>> {
        let end = match self.ends.get(i) {
            Some(&end) => end,
            None => return None,
        };
        let start = match i.checked_sub(1).and_then(|i| self.ends.get(i)) {
            Some(&start) => start,
            None => 0,
        };
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use std::cmp::Ordering;

    #[test]
    fn record_fields() {
        let mut rec = Record::new(0);
        rec.load(b"foobarquux", &[3, 6, 10]);

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get_field(0), Some(&b"foo"[..]));
        assert_eq!(rec.get_field(1), Some(&b"bar"[..]));
        assert_eq!(rec.get_field(2), Some(&b"quux"[..]));
        assert_eq!(rec.get_field(3), None);

        assert_eq!(rec.key(), &b"foo"[..]);
        let non_key: Vec<&[u8]> = rec.non_key_fields().collect();
        assert_eq!(non_key, vec![&b"bar"[..], &b"quux"[..]]);
    }

    #[test]
    fn record_key_not_first() {
        let mut rec = Record::new(1);
        rec.load(b"foobarquux", &[3, 6, 10]);

        assert_eq!(rec.key(), &b"bar"[..]);
        let non_key: Vec<&[u8]> = rec.non_key_fields().collect();
        assert_eq!(non_key, vec![&b"foo"[..], &b"quux"[..]]);
    }

    #[test]
    fn record_missing_key_is_empty() {
        let mut rec = Record::new(5);
        rec.load(b"foobar", &[3, 6]);

        assert_eq!(rec.key(), &b""[..]);
        let non_key: Vec<&[u8]> = rec.non_key_fields().collect();
        assert_eq!(non_key, vec![&b"foo"[..], &b"bar"[..]]);
    }

    #[test]
    fn record_cmp_key() {
        let mut a = Record::new(0);
        a.load(b"applered", &[5, 8]);
        let mut b = Record::new(1);
        b.load(b"smallpear", &[5, 9]);

        assert_eq!(a.cmp_key(&b), Ordering::Less);
        assert_eq!(b.cmp_key(&a), Ordering::Greater);
        assert_eq!(a.cmp_key(&a), Ordering::Equal);
    }

    #[test]
    fn record_blank_line() {
        let mut rec = Record::new(0);
        rec.load(b"", &[0]);
        assert!(rec.is_blank());
        assert_eq!(rec.key(), &b""[..]);
    }
}
