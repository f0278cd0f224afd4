//! Queue module - upcoming shapes and purchasable slot unlocks
//!
//! The player-facing queue holds up to `MAX_QUEUE_SLOTS` slots. Slots beyond
//! the unlocked count are purchasable placeholders with escalating costs;
//! buying one converts it into an active shape slot. Two generation modes:
//! `Infinite` refills consumed slots from the generator on demand, `Finite`
//! draws from a pre-generated backlog and leaves slots permanently empty
//! once it runs dry (the finite-mode end condition).
//!
//! Every item carries a session-unique, monotonically assigned id so a
//! presentation layer can track removal and insertion animations; ids are
//! never reused.

use blockfall_types::{QueueMode, MAX_QUEUE_SLOTS, SLOT_COSTS};

use crate::generator::ShapeGenerator;
use crate::rng::RandomSource;
use crate::shape::Shape;

/// One entry of the visible queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueueItem {
    /// An active slot holding a shape ready to play
    Shape { id: u64, shape: Shape },
    /// A locked slot offered for purchase
    Purchasable { id: u64, slot_number: u8, cost: u32 },
}

impl QueueItem {
    /// Stable id used by animation tracking
    pub fn id(&self) -> u64 {
        match self {
            QueueItem::Shape { id, .. } => *id,
            QueueItem::Purchasable { id, .. } => *id,
        }
    }
}

/// Ordinary failure outcomes of queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    SlotOutOfRange,
    SlotEmpty,
    SlotLocked,
    NotPurchasable,
    InsufficientScore,
}

impl QueueError {
    pub fn code(self) -> &'static str {
        match self {
            QueueError::SlotOutOfRange | QueueError::SlotEmpty | QueueError::SlotLocked => {
                "invalid_slot"
            }
            QueueError::NotPurchasable | QueueError::InsufficientScore => "invalid_purchase",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QueueError::SlotOutOfRange => "slot index outside the queue",
            QueueError::SlotEmpty => "slot has no shape left",
            QueueError::SlotLocked => "slot is still purchasable",
            QueueError::NotPurchasable => "slot is not offered for purchase",
            QueueError::InsufficientScore => "score below the slot cost",
        }
    }
}

/// The sequence of upcoming shapes plus slot unlock state
#[derive(Debug, Clone)]
pub struct ShapeQueue {
    slots: [Option<QueueItem>; MAX_QUEUE_SLOTS],
    mode: QueueMode,
    /// Pre-generated backlog for finite mode, drawn front to back
    hidden: Vec<Shape>,
    hidden_index: usize,
    next_id: u64,
    generator: ShapeGenerator,
}

impl ShapeQueue {
    /// Create an infinite-mode queue with `unlocked_slots` active slots
    pub fn new_infinite(
        unlocked_slots: usize,
        generator: ShapeGenerator,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mut queue = Self {
            slots: [None; MAX_QUEUE_SLOTS],
            mode: QueueMode::Infinite,
            hidden: Vec::new(),
            hidden_index: 0,
            next_id: 0,
            generator,
        };
        queue.init_slots(unlocked_slots, rng);
        queue
    }

    /// Create a finite-mode queue backed by `total` pre-generated shapes
    pub fn new_finite(
        unlocked_slots: usize,
        total: usize,
        generator: ShapeGenerator,
        rng: &mut impl RandomSource,
    ) -> Self {
        let hidden = (0..total).map(|_| generator.generate(rng)).collect();
        let mut queue = Self {
            slots: [None; MAX_QUEUE_SLOTS],
            mode: QueueMode::Finite,
            hidden,
            hidden_index: 0,
            next_id: 0,
            generator,
        };
        queue.init_slots(unlocked_slots, rng);
        queue
    }

    fn init_slots(&mut self, unlocked_slots: usize, rng: &mut impl RandomSource) {
        let unlocked = unlocked_slots.clamp(1, MAX_QUEUE_SLOTS);
        for index in 0..MAX_QUEUE_SLOTS {
            self.slots[index] = if index < unlocked {
                self.draw(rng).map(|shape| QueueItem::Shape {
                    id: self.alloc_id(),
                    shape,
                })
            } else {
                Some(QueueItem::Purchasable {
                    id: self.alloc_id(),
                    slot_number: (index + 1) as u8,
                    cost: SLOT_COSTS[index - 1],
                })
            };
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Next shape from the mode's source, None when a finite backlog is dry
    fn draw(&mut self, rng: &mut impl RandomSource) -> Option<Shape> {
        match self.mode {
            QueueMode::Infinite => Some(self.generator.generate(rng)),
            QueueMode::Finite => {
                let shape = self.hidden.get(self.hidden_index).copied();
                if shape.is_some() {
                    self.hidden_index += 1;
                }
                shape
            }
        }
    }

    /// Generation policy of this queue
    pub fn mode(&self) -> QueueMode {
        self.mode
    }

    /// The visible slots, in upcoming order
    pub fn slots(&self) -> &[Option<QueueItem>] {
        &self.slots
    }

    /// The shape in a slot, if that slot is active and filled
    pub fn shape_at(&self, slot: usize) -> Option<&Shape> {
        match self.slots.get(slot) {
            Some(Some(QueueItem::Shape { shape, .. })) => Some(shape),
            _ => None,
        }
    }

    /// All shapes currently visible, in slot order
    pub fn visible_shapes(&self) -> Vec<Shape> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Some(QueueItem::Shape { shape, .. }) => Some(*shape),
                _ => None,
            })
            .collect()
    }

    /// Shapes still waiting beyond the visible window (finite mode)
    pub fn hidden_shapes(&self) -> &[Shape] {
        &self.hidden[self.hidden_index..]
    }

    /// Count of shapes still waiting beyond the visible window
    pub fn hidden_remaining(&self) -> usize {
        self.hidden.len() - self.hidden_index
    }

    /// Number of slots no longer offered for purchase
    pub fn unlocked_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Some(QueueItem::Purchasable { .. })))
            .count()
    }

    /// Finite-mode end condition: backlog dry and no shape left to play
    pub fn is_exhausted(&self) -> bool {
        self.mode == QueueMode::Finite
            && self.hidden_remaining() == 0
            && self.visible_shapes().is_empty()
    }

    /// Take the shape out of a slot and refill per the queue mode
    ///
    /// In finite mode a dry backlog leaves the slot permanently empty.
    pub fn consume_shape(
        &mut self,
        slot: usize,
        rng: &mut impl RandomSource,
    ) -> Result<Shape, QueueError> {
        if slot >= MAX_QUEUE_SLOTS {
            return Err(QueueError::SlotOutOfRange);
        }
        let taken = match self.slots[slot] {
            Some(QueueItem::Shape { shape, .. }) => shape,
            Some(QueueItem::Purchasable { .. }) => return Err(QueueError::SlotLocked),
            None => return Err(QueueError::SlotEmpty),
        };
        self.slots[slot] = self.draw(rng).map(|shape| QueueItem::Shape {
            id: self.alloc_id(),
            shape,
        });
        Ok(taken)
    }

    /// Convert a purchasable slot into an active shape slot
    ///
    /// Returns the cost the caller must deduct from its score.
    pub fn purchase_slot(
        &mut self,
        slot: usize,
        available_score: u32,
        rng: &mut impl RandomSource,
    ) -> Result<u32, QueueError> {
        if slot >= MAX_QUEUE_SLOTS {
            return Err(QueueError::SlotOutOfRange);
        }
        let cost = match self.slots[slot] {
            Some(QueueItem::Purchasable { cost, .. }) => cost,
            _ => return Err(QueueError::NotPurchasable),
        };
        if available_score < cost {
            return Err(QueueError::InsufficientScore);
        }
        self.slots[slot] = self.draw(rng).map(|shape| QueueItem::Shape {
            id: self.alloc_id(),
            shape,
        });
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn queue_with(unlocked: usize) -> (ShapeQueue, SimpleRng) {
        let mut rng = SimpleRng::new(11);
        let queue = ShapeQueue::new_infinite(unlocked, ShapeGenerator::uniform(), &mut rng);
        (queue, rng)
    }

    #[test]
    fn test_initial_layout_one_unlocked() {
        let (queue, _) = queue_with(1);

        assert!(matches!(queue.slots()[0], Some(QueueItem::Shape { .. })));
        for (index, expected_cost) in [(1, 5_000), (2, 15_000), (3, 50_000)] {
            match queue.slots()[index] {
                Some(QueueItem::Purchasable {
                    slot_number, cost, ..
                }) => {
                    assert_eq!(slot_number as usize, index + 1);
                    assert_eq!(cost, expected_cost);
                }
                ref other => panic!("slot {index} should be purchasable, got {other:?}"),
            }
        }
        assert_eq!(queue.unlocked_slots(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let (mut queue, mut rng) = queue_with(4);
        let mut seen = std::collections::HashSet::new();
        for slot in queue.slots() {
            assert!(seen.insert(slot.as_ref().unwrap().id()));
        }
        // Consuming mints fresh ids, never reusing old ones.
        for _ in 0..20 {
            queue.consume_shape(0, &mut rng).unwrap();
            assert!(seen.insert(queue.slots()[0].as_ref().unwrap().id()));
        }
    }

    #[test]
    fn test_purchase_slot_two() {
        let (mut queue, mut rng) = queue_with(1);

        let cost = queue.purchase_slot(1, 5_000, &mut rng).unwrap();
        assert_eq!(cost, 5_000);
        assert!(matches!(queue.slots()[1], Some(QueueItem::Shape { .. })));
        assert_eq!(queue.unlocked_slots(), 2);
    }

    #[test]
    fn test_purchase_requires_score() {
        let (mut queue, mut rng) = queue_with(1);
        assert_eq!(
            queue.purchase_slot(1, 4_999, &mut rng),
            Err(QueueError::InsufficientScore)
        );
        assert!(matches!(
            queue.slots()[1],
            Some(QueueItem::Purchasable { .. })
        ));
    }

    #[test]
    fn test_purchase_rejects_active_slot() {
        let (mut queue, mut rng) = queue_with(1);
        assert_eq!(
            queue.purchase_slot(0, 100_000, &mut rng),
            Err(QueueError::NotPurchasable)
        );
        assert_eq!(
            queue.purchase_slot(9, 100_000, &mut rng),
            Err(QueueError::SlotOutOfRange)
        );
    }

    #[test]
    fn test_infinite_mode_refills_on_consume() {
        let (mut queue, mut rng) = queue_with(1);
        let first = queue.consume_shape(0, &mut rng).unwrap();
        assert!(first.cell_count() > 0);
        assert!(queue.shape_at(0).is_some());
    }

    #[test]
    fn test_consume_locked_slot_fails() {
        let (mut queue, mut rng) = queue_with(1);
        assert_eq!(
            queue.consume_shape(1, &mut rng),
            Err(QueueError::SlotLocked)
        );
    }

    #[test]
    fn test_finite_mode_exhausts() {
        let mut rng = SimpleRng::new(3);
        let mut queue = ShapeQueue::new_finite(2, 5, ShapeGenerator::uniform(), &mut rng);
        assert_eq!(queue.hidden_remaining(), 3);
        assert!(!queue.is_exhausted());

        // Slot 0 sees its initial shape plus the three backlog refills.
        for _ in 0..4 {
            queue.consume_shape(0, &mut rng).unwrap();
        }
        assert_eq!(queue.hidden_remaining(), 0);
        assert!(queue.shape_at(0).is_none());
        assert_eq!(queue.consume_shape(0, &mut rng), Err(QueueError::SlotEmpty));

        // One shape still sits in slot 1.
        assert!(!queue.is_exhausted());
        queue.consume_shape(1, &mut rng).unwrap();
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_finite_purchase_draws_from_backlog() {
        let mut rng = SimpleRng::new(8);
        let mut queue = ShapeQueue::new_finite(1, 3, ShapeGenerator::uniform(), &mut rng);
        assert_eq!(queue.hidden_remaining(), 2);

        queue.purchase_slot(1, 10_000, &mut rng).unwrap();
        assert_eq!(queue.hidden_remaining(), 1);
        assert!(queue.shape_at(1).is_some());
    }
}
