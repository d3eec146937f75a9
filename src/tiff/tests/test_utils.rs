use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::io::ByteOrder;
use crate::tiff::constants::field_types;

/// Payload of a test entry
enum Payload {
    /// Encoded value bytes; inline when they fit in four bytes
    Data(Vec<u8>),
    /// LONG pointer to the directory with this index
    Directory(usize),
}

/// One directory entry to be written by `TiffBlockBuilder`
pub struct TestEntry {
    tag: u16,
    field_type: u16,
    count: u32,
    payload: Payload,
}

impl TestEntry {
    /// Entry with raw, already-encoded payload bytes
    pub fn raw(tag: u16, field_type: u16, count: u32, payload: Vec<u8>) -> Self {
        TestEntry { tag, field_type, count, payload: Payload::Data(payload) }
    }

    /// LONG entry pointing at another directory of the block
    pub fn pointer(tag: u16, directory: usize) -> Self {
        TestEntry { tag, field_type: field_types::LONG, count: 1, payload: Payload::Directory(directory) }
    }
}

/// Builds a TIFF block from a list of directories
///
/// Layout: 8-byte header, every directory back to back (directory 0 is the
/// first IFD), then a data area for payloads that do not fit inline.
pub struct TiffBlockBuilder {
    byte_order: ByteOrder,
    directories: Vec<Vec<TestEntry>>,
}

impl TiffBlockBuilder {
    pub fn new(byte_order: ByteOrder) -> Self {
        TiffBlockBuilder { byte_order, directories: vec![Vec::new()] }
    }

    /// Adds an entry to directory `dir`, creating directories as needed
    pub fn entry(mut self, dir: usize, entry: TestEntry) -> Self {
        while self.directories.len() <= dir {
            self.directories.push(Vec::new());
        }
        self.directories[dir].push(entry);
        self
    }

    pub fn short(self, dir: usize, tag: u16, values: &[u16]) -> Self {
        let payload = encode_shorts(self.byte_order, values);
        self.entry(dir, TestEntry::raw(tag, field_types::SHORT, values.len() as u32, payload))
    }

    pub fn long(self, dir: usize, tag: u16, values: &[u32]) -> Self {
        let payload = encode_longs(self.byte_order, values);
        self.entry(dir, TestEntry::raw(tag, field_types::LONG, values.len() as u32, payload))
    }

    pub fn slong(self, dir: usize, tag: u16, values: &[i32]) -> Self {
        let payload = encode_slongs(self.byte_order, values);
        self.entry(dir, TestEntry::raw(tag, field_types::SLONG, values.len() as u32, payload))
    }

    pub fn bytes(self, dir: usize, tag: u16, field_type: u16, values: &[u8]) -> Self {
        self.entry(dir, TestEntry::raw(tag, field_type, values.len() as u32, values.to_vec()))
    }

    /// ASCII entry; the trailing NUL is appended here
    pub fn ascii(self, dir: usize, tag: u16, text: &str) -> Self {
        let mut payload = text.as_bytes().to_vec();
        payload.push(0);
        let count = payload.len() as u32;
        self.entry(dir, TestEntry::raw(tag, field_types::ASCII, count, payload))
    }

    pub fn rational(self, dir: usize, tag: u16, values: &[(u32, u32)]) -> Self {
        let flat: Vec<u32> = values.iter().flat_map(|&(n, d)| [n, d]).collect();
        let payload = encode_longs(self.byte_order, &flat);
        self.entry(dir, TestEntry::raw(tag, field_types::RATIONAL, values.len() as u32, payload))
    }

    pub fn srational(self, dir: usize, tag: u16, values: &[(i32, i32)]) -> Self {
        let flat: Vec<i32> = values.iter().flat_map(|&(n, d)| [n, d]).collect();
        let payload = encode_slongs(self.byte_order, &flat);
        self.entry(dir, TestEntry::raw(tag, field_types::SRATIONAL, values.len() as u32, payload))
    }

    /// Serializes the block
    pub fn build(self) -> Vec<u8> {
        let order = self.byte_order;

        let mut dir_offsets = Vec::with_capacity(self.directories.len());
        let mut next = 8u32;
        for dir in &self.directories {
            dir_offsets.push(next);
            next += 2 + 12 * dir.len() as u32 + 4;
        }
        let mut data_area: Vec<u8> = Vec::new();
        let data_start = next;

        let mut out = Vec::new();
        match order {
            ByteOrder::LittleEndian => out.extend_from_slice(b"II"),
            ByteOrder::BigEndian => out.extend_from_slice(b"MM"),
        }
        write_u16(&mut out, order, 42);
        write_u32(&mut out, order, 8);

        for dir in &self.directories {
            write_u16(&mut out, order, dir.len() as u16);
            for entry in dir {
                write_u16(&mut out, order, entry.tag);
                write_u16(&mut out, order, entry.field_type);
                write_u32(&mut out, order, entry.count);
                match &entry.payload {
                    Payload::Directory(index) => write_u32(&mut out, order, dir_offsets[*index]),
                    Payload::Data(bytes) if bytes.len() <= 4 => {
                        let mut field = bytes.clone();
                        field.resize(4, 0);
                        out.extend_from_slice(&field);
                    }
                    Payload::Data(bytes) => {
                        write_u32(&mut out, order, data_start + data_area.len() as u32);
                        data_area.extend_from_slice(bytes);
                    }
                }
            }
            write_u32(&mut out, order, 0);
        }

        out.extend_from_slice(&data_area);
        out
    }
}

/// Wraps a TIFF block in a minimal JPEG: SOI, an APP0 segment, then APP1
pub fn wrap_in_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];

    // APP0 / JFIF, skipped by the marker scan
    out.extend_from_slice(&[0xFF, 0xE0]);
    out.write_u16::<BigEndian>(16).unwrap();
    out.extend_from_slice(b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0");

    out.extend_from_slice(&[0xFF, 0xE1]);
    out.write_u16::<BigEndian>((2 + 6 + tiff.len()) as u16).unwrap();
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);

    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// Wraps a TIFF block in a minimal HEIC layout understood by the locator
///
/// ftyp box, then a meta box holding an item info entry of type "Exif"
/// (item 1) and an iloc box whose single extent points at the EXIF payload
/// appended after the meta box. The payload starts with a 4-byte preamble
/// length followed by a 6-byte "Exif\0\0" preamble.
pub fn wrap_in_heic(tiff: &[u8]) -> Vec<u8> {
    let exif_item: u16 = 1;
    let mut out = Vec::new();

    // ftyp
    out.write_u32::<BigEndian>(24).unwrap();
    out.extend_from_slice(b"ftypheic\0\0\0\0mif1heic");

    let meta_start = out.len();
    let mut meta = Vec::new();
    meta.write_u32::<BigEndian>(0).unwrap(); // size, patched below
    meta.extend_from_slice(b"meta\0\0\0\0");

    // infe: ... item_ID(2) protection(2) item_type(4)
    meta.write_u32::<BigEndian>(21).unwrap();
    meta.extend_from_slice(b"infe\x02\0\0\0");
    meta.write_u16::<BigEndian>(exif_item).unwrap();
    meta.write_u16::<BigEndian>(0).unwrap();
    meta.extend_from_slice(b"Exif\0");

    // iloc: "iloc" + version/flags(4) + sizes(2) + item_count(2), then records
    meta.write_u32::<BigEndian>(4 + 4 + 4 + 2 + 2 + 16).unwrap();
    meta.extend_from_slice(b"iloc");
    meta.write_u32::<BigEndian>(0).unwrap();
    meta.write_u16::<BigEndian>(0x4400).unwrap();
    meta.write_u16::<BigEndian>(1).unwrap();
    let record_at = meta.len();
    meta.write_u16::<BigEndian>(exif_item).unwrap(); // item_ID
    meta.write_u16::<BigEndian>(0).unwrap(); // data_reference_index
    meta.write_u16::<BigEndian>(1).unwrap(); // extent_count
    meta.write_u16::<BigEndian>(0).unwrap(); // padding to the extent offset
    meta.write_u32::<BigEndian>(0).unwrap(); // extent_offset, patched below
    meta.write_u32::<BigEndian>(0).unwrap(); // extent_length, patched below

    let meta_len = meta.len() as u32;
    (&mut meta[0..4]).write_u32::<BigEndian>(meta_len).unwrap();

    let extent_offset = (meta_start + meta.len()) as u32;
    let extent_len = (4 + 6 + tiff.len()) as u32;
    (&mut meta[record_at + 8..record_at + 12]).write_u32::<BigEndian>(extent_offset).unwrap();
    (&mut meta[record_at + 12..record_at + 16]).write_u32::<BigEndian>(extent_len).unwrap();

    out.extend_from_slice(&meta);
    out.write_u32::<BigEndian>(6).unwrap();
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out
}

fn write_u16(out: &mut Vec<u8>, order: ByteOrder, value: u16) {
    match order {
        ByteOrder::LittleEndian => out.write_u16::<LittleEndian>(value).unwrap(),
        ByteOrder::BigEndian => out.write_u16::<BigEndian>(value).unwrap(),
    }
}

fn write_u32(out: &mut Vec<u8>, order: ByteOrder, value: u32) {
    match order {
        ByteOrder::LittleEndian => out.write_u32::<LittleEndian>(value).unwrap(),
        ByteOrder::BigEndian => out.write_u32::<BigEndian>(value).unwrap(),
    }
}

fn encode_shorts(order: ByteOrder, values: &[u16]) -> Vec<u8> {
    let mut out = Vec::new();
    for &v in values {
        write_u16(&mut out, order, v);
    }
    out
}

fn encode_longs(order: ByteOrder, values: &[u32]) -> Vec<u8> {
    let mut out = Vec::new();
    for &v in values {
        write_u32(&mut out, order, v);
    }
    out
}

fn encode_slongs(order: ByteOrder, values: &[i32]) -> Vec<u8> {
    let mut out = Vec::new();
    for &v in values {
        write_u32(&mut out, order, v as u32);
    }
    out
}
