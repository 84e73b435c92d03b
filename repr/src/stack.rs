use std::fmt::Display;
use std::sync::Arc;

use crate::types::TypeDescriptor;

/// Point-in-time copy of the verifier's believed operand stack.
///
/// # Indexing
///
/// Slot `0` is the **top** of the stack, slot `len() - 1` is the bottom.
/// Every constructor and query in this crate follows this convention,
/// use [`from_bottom_up`](Self::from_bottom_up) or [`capture`](Self::capture)
/// when the source is ordered the other way around.
///
/// Snapshot owns its contents and is never mutated after construction.
/// Clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackSnapshot(Arc<[TypeDescriptor]>);

impl StackSnapshot {
    pub fn empty() -> Self {
        StackSnapshot(Vec::new().into())
    }

    /// Construct snapshot out of slots listed starting from the top of the stack.
    pub fn from_top_down(slots: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        StackSnapshot(slots.into_iter().collect())
    }

    /// Construct snapshot out of slots listed starting from the bottom of the stack.
    pub fn from_bottom_up(slots: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut slots: Vec<_> = slots.into_iter().collect();
        slots.reverse();

        StackSnapshot(slots.into())
    }

    /// Copy verifier's working stack.
    ///
    /// Working stacks grow at the end, so `stack` is expected to be ordered bottom-up.
    pub fn capture(stack: &[TypeDescriptor]) -> Self {
        StackSnapshot(stack.iter().rev().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TypeDescriptor> {
        self.0.get(index)
    }

    pub fn top(&self) -> Option<&TypeDescriptor> {
        self.get(0)
    }

    /// Iterate over slots starting from the top.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.0.iter()
    }

    pub fn iter_bottom_up(&self) -> std::iter::Rev<std::slice::Iter<'_, TypeDescriptor>> {
        self.0.iter().rev()
    }

    pub fn as_slice(&self) -> &[TypeDescriptor] {
        &self.0
    }

    pub fn emit_pretty(&self, writer: &mut impl std::fmt::Write) -> Result<(), std::fmt::Error> {
        if self.is_empty() {
            return writeln!(writer, "[]");
        }

        writeln!(writer, "[")?;
        for (slot, ty) in self.iter().enumerate() {
            writeln!(writer, "    [{slot:>2}] {ty}")?;
        }
        writeln!(writer, "]")?;

        Ok(())
    }

    pub fn to_pretty_string(&self) -> String {
        let mut r = String::new();
        // Writing into `String` never fails.
        let _ = self.emit_pretty(&mut r);
        r
    }
}

impl Default for StackSnapshot {
    fn default() -> Self {
        StackSnapshot::empty()
    }
}

impl std::ops::Index<usize> for StackSnapshot {
    type Output = TypeDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a StackSnapshot {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TypeDescriptor> for StackSnapshot {
    /// Collects slots in top-down order.
    fn from_iter<T: IntoIterator<Item = TypeDescriptor>>(iter: T) -> Self {
        StackSnapshot::from_top_down(iter)
    }
}

impl Display for StackSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, ty) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ty}")?;
        }
        write!(f, "]")
    }
}
