#![no_main]

use std::alloc::{GlobalAlloc, Layout};
use std::ptr;

use fixalloc::HeapAllocator;

use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Alloc { size: u16, align_bit: u8 },
    Dealloc { index: u8 },
    Realloc { index: u8, new_size: u16 },
}
use Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let allocator: HeapAllocator<{ 1 << 16 }, false> = HeapAllocator::new();

    let mut allocations: Vec<(*mut u8, Layout)> = vec![];

    for action in actions {
        match action {
            Alloc { size, align_bit } => {
                if size == 0 || align_bit > 12 {
                    continue;
                }
                let layout = Layout::from_size_align(size as usize, 1 << (align_bit % 12)).unwrap();
                let ptr = unsafe { allocator.alloc(layout) };
                if ptr != ptr::null_mut() {
                    allocations.push((ptr, layout));
                    unsafe { ptr.write_bytes(0xab, layout.size()) };
                }
            }
            Dealloc { index } => {
                if index as usize >= allocations.len() {
                    continue;
                }
                let (ptr, layout) = allocations.swap_remove(index as usize);
                unsafe { allocator.dealloc(ptr, layout) };
            }
            Realloc { index, new_size } => {
                if index as usize >= allocations.len() || new_size == 0 {
                    continue;
                }
                let (ptr, old_layout) = allocations[index as usize];
                let new_ptr = unsafe { allocator.realloc(ptr, old_layout, new_size as usize) };
                if new_ptr != ptr::null_mut() {
                    let new_layout =
                        Layout::from_size_align(new_size as usize, old_layout.align()).unwrap();
                    allocations[index as usize] = (new_ptr, new_layout);
                    if old_layout.size() < new_size as usize {
                        unsafe {
                            new_ptr
                                .add(old_layout.size())
                                .write_bytes(0xcd, new_size as usize - old_layout.size())
                        };
                    }
                }
            }
        }
    }

    for (ptr, layout) in allocations {
        unsafe { allocator.dealloc(ptr, layout) };
    }
});
