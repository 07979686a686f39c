use crate::partials::Partial;
use crate::Symbol;

/// Heap-allocated edge label.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VectorPartial<S> {
    data: Box<[S]>,
}

impl<S: Symbol> VectorPartial<S> {
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    pub fn from_slice(src: &[S]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    pub fn to_slice(&self) -> &[S] {
        &self.data
    }
}

impl<S: Symbol> From<&[S]> for VectorPartial<S> {
    fn from(src: &[S]) -> Self {
        Self::from_slice(src)
    }
}

impl<S> AsRef<[S]> for VectorPartial<S> {
    fn as_ref(&self) -> &[S] {
        &self.data
    }
}

impl<S: Symbol> Partial<S> for VectorPartial<S> {
    fn partial_before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        VectorPartial::from_slice(&self.data[..length])
    }

    fn partial_after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        VectorPartial::from_slice(&self.data[start..])
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_split_points() {
        let p = VectorPartial::from_slice(&chars("ababba"));
        assert_eq!(p.partial_before(4).to_slice(), chars("abab").as_slice());
        assert_eq!(p.partial_after(4).to_slice(), chars("ba").as_slice());
        assert_eq!(p.partial_after(6).len(), 0);
        assert!(p.partial_before(0).is_empty());
        assert_eq!(p.first(), Some(&'a'));
    }

    #[test]
    fn test_prefix_length() {
        let p = VectorPartial::from_slice(&chars("ababba"));
        assert_eq!(p.prefix_length_slice(&chars("ababaa")), 4);
        assert_eq!(p.prefix_length_slice(&chars("ab")), 2);
        assert_eq!(p.prefix_length_slice(&chars("ababbaxx")), 6);
        assert_eq!(p.prefix_length_slice(&chars("b")), 0);
        assert_eq!(p.prefix_length_slice(&[]), 0);
    }

    #[test]
    #[should_panic]
    fn test_split_out_of_bounds() {
        let p = VectorPartial::from_slice(&[1u8, 2, 3]);
        p.partial_before(4);
    }

    #[test]
    fn test_empty() {
        let p = VectorPartial::<u8>::empty();
        assert!(p.is_empty());
        assert_eq!(p.first(), None);
    }
}
