use std::mem;

use crate::collections::contiguous::ArrayList;
use crate::util::error::CapacityOverflow;

/// The position of a node within the [`Arena`] of the list that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeHandle(pub usize);

pub(crate) type Link = Option<NodeHandle>;

/// A single element of a list and its links to its neighbours. The links don't own anything,
/// the list owns every node through its arena.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

#[derive(Debug)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant {
        next_free: Link,
    },
}

/// Storage for the nodes of a list, addressed by [`NodeHandle`].
///
/// Slots vacated by removed nodes are chained together into a free list and handed out again
/// before the arena grows. A node and its slot share nothing once the node is removed: the node is
/// moved out and the slot only remembers the next free slot.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    pub slots: ArrayList<Slot<T>>,
    pub free: Link,
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            slots: ArrayList::new(),
            free: None,
        }
    }

    /// Moves `node` into a free slot, reusing vacated slots before growing.
    pub fn try_alloc(&mut self, node: Node<T>) -> Result<NodeHandle, CapacityOverflow> {
        match self.free {
            Some(handle) => {
                let slot = self.slots.get_mut(handle.0);
                match slot {
                    Slot::Vacant { next_free } => self.free = *next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot on the free list"),
                }
                *slot = Slot::Occupied(node);
                Ok(handle)
            },
            None => {
                self.slots.try_push(Slot::Occupied(node))?;
                Ok(NodeHandle(self.slots.len() - 1))
            },
        }
    }

    /// Ensures that the next allocation can't fail.
    pub fn try_reserve_one(&mut self) -> Result<(), CapacityOverflow> {
        match self.free {
            Some(_) => Ok(()),
            None => self.slots.try_reserve(1),
        }
    }

    /// Moves the node out of its slot and puts the slot on the free list.
    pub fn take(&mut self, handle: NodeHandle) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };

        match mem::replace(self.slots.get_mut(handle.0), vacant) {
            Slot::Occupied(node) => {
                self.free = Some(handle);
                node
            },
            Slot::Vacant { .. } => unreachable!("node taken twice"),
        }
    }

    pub fn node(&self, handle: NodeHandle) -> &Node<T> {
        match self.slots.get(handle.0) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to a vacant slot"),
        }
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        match self.slots.get_mut(handle.0) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to a vacant slot"),
        }
    }

    /// Drops every node and forgets the free list, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
