// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! Common device driver code.

use core::marker::PhantomData;

use tock_registers::{
    interfaces::{Readable, Writeable},
    RegisterLongName,
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// A 32-bit wide MMIO register, addressed by its absolute location.
///
/// The handle carries only the address. Every read and write is exactly one access through the
/// [`mmio`] primitives; the bit field semantics are attached via the `tock-registers` interface
/// traits, so call sites use the usual `read`/`write`/`modify`/`is_set` vocabulary together with
/// the field definitions of the respective driver.
///
/// Register width is fixed at 32 bits no matter how many semantic bits a register defines;
/// unnamed bits are reserved, get written as zero by full-register `write`s and are never
/// interpreted on reads.
pub struct Reg32<R: RegisterLongName = ()> {
    addr: usize,
    phantom: PhantomData<fn() -> R>,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl<R: RegisterLongName> Reg32<R> {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide the correct register address.
    pub const unsafe fn new(addr: usize) -> Self {
        Self {
            addr,
            phantom: PhantomData,
        }
    }

    /// Return the wrapped address.
    pub fn addr(&self) -> usize {
        self.addr
    }
}

impl<R: RegisterLongName> Readable for Reg32<R> {
    type T = u32;
    type R = R;

    fn get(&self) -> u32 {
        mmio::read(self.addr)
    }
}

impl<R: RegisterLongName> Writeable for Reg32<R> {
    type T = u32;
    type R = R;

    fn set(&self, value: u32) {
        mmio::write(self.addr, value)
    }
}

/// Raw MMIO accesses.
///
/// Exactly one non-elidable, non-reorderable hardware access per call. In unit test builds the
/// accesses are routed to a mock bus device instead of the physical address space.
pub mod mmio {
    /// Read a 32-bit register.
    #[cfg(not(test))]
    #[inline(always)]
    pub fn read(addr: usize) -> u32 {
        // Volatile keeps the compiler from caching, merging or reordering the access; each one
        // has a hardware side effect. The addresses handed out by the BSP memory map point at
        // device memory, never at Rust objects.
        unsafe { (addr as *const u32).read_volatile() }
    }

    /// Write a 32-bit register.
    #[cfg(not(test))]
    #[inline(always)]
    pub fn write(addr: usize, value: u32) {
        unsafe { (addr as *mut u32).write_volatile(value) }
    }

    #[cfg(test)]
    pub use super::mock_bus::{read, write};
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

/// A mock MMIO bus.
///
/// Unit tests install a software model of the peripheral under test; the [`mmio`] primitives
/// then forward each access to it. One device per test thread, so tests stay independent.
#[cfg(test)]
pub mod mock_bus {
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Implemented by software models of MMIO peripherals.
    pub trait BusDevice {
        fn read(&mut self, addr: usize) -> u32;
        fn write(&mut self, addr: usize, value: u32);
    }

    thread_local! {
        static DEVICE: RefCell<Option<Rc<RefCell<dyn BusDevice>>>> = RefCell::new(None);
    }

    /// Route all MMIO accesses of the current test thread to `device`.
    pub fn install(device: Rc<RefCell<dyn BusDevice>>) {
        DEVICE.with(|d| *d.borrow_mut() = Some(device));
    }

    pub fn read(addr: usize) -> u32 {
        DEVICE.with(|d| {
            d.borrow()
                .as_ref()
                .expect("MMIO read without an installed mock bus device")
                .borrow_mut()
                .read(addr)
        })
    }

    pub fn write(addr: usize, value: u32) {
        DEVICE.with(|d| {
            d.borrow()
                .as_ref()
                .expect("MMIO write without an installed mock bus device")
                .borrow_mut()
                .write(addr, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Plain storage, for checking the access plumbing itself.
    struct RamDevice {
        base: usize,
        cells: [u32; 4],
    }

    impl mock_bus::BusDevice for RamDevice {
        fn read(&mut self, addr: usize) -> u32 {
            self.cells[(addr - self.base) / 4]
        }

        fn write(&mut self, addr: usize, value: u32) {
            self.cells[(addr - self.base) / 4] = value;
        }
    }

    #[test]
    fn reg32_hits_the_exact_cell() {
        const BASE: usize = 0x1000;

        let ram = Rc::new(RefCell::new(RamDevice {
            base: BASE,
            cells: [0; 4],
        }));
        mock_bus::install(ram.clone());

        let reg = unsafe { Reg32::<()>::new(BASE + 8) };
        reg.set(0xDEAD_BEEF);

        assert_eq!(ram.borrow().cells, [0, 0, 0xDEAD_BEEF, 0]);
        assert_eq!(reg.get(), 0xDEAD_BEEF);
        assert_eq!(reg.addr(), BASE + 8);
    }
}
