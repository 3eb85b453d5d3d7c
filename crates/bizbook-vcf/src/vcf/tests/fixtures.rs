//! VCF import test fixtures.
//!
//! Shapes seen in exports from phones, mail clients and address books.

/// One well-formed card.
pub const VCF_MINIMAL: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Jane Doe\n\
TEL:+1-555-0100\n\
EMAIL:jane@example.com\n\
END:VCARD\n";

/// Three cards; the middle one has no `FN:` line.
pub const VCF_MIDDLE_NAMELESS: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
FN:First Person\n\
TEL:111\n\
END:VCARD\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
N:Nameless;Middle;;;\n\
TEL:222\n\
END:VCARD\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Third Person\n\
EMAIL:third@example.com\n\
END:VCARD\n";

/// A single card with only a structured name.
pub const VCF_ONLY_STRUCTURED_NAME: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
N:Doe;Jane;;;\n\
END:VCARD\n";

/// vCard 3.0 with CRLF line endings and repeated typed properties.
pub const VCF_TYPED_PROPERTIES: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Wilson;Robert;;;\r\n\
FN:Robert Wilson\r\n\
TEL;TYPE=WORK,VOICE:+1-555-0101\r\n\
TEL;TYPE=CELL:+1-555-0102\r\n\
TEL;TYPE=HOME:+1-555-0103\r\n\
EMAIL;TYPE=INTERNET:robert@work.example\r\n\
EMAIL;TYPE=INTERNET,PREF:robert@home.example\r\n\
EMAIL;TYPE=INTERNET:robert@old.example\r\n\
ADR;TYPE=WORK:;;123 Main St;Anytown;CA;12345;USA\r\n\
ADR;TYPE=HOME:;;456 Oak Ave;Hometown;NY;67890;USA\r\n\
NOTE:Prefers morning appointments\r\n\
END:VCARD\r\n";

/// vCard 2.1 style export with quoted-printable values.
pub const VCF_QUOTED_PRINTABLE: &str = "\
BEGIN:VCARD\n\
VERSION:2.1\n\
FN:Jose Garcia\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Garc=C3=ADa;Jos=C3=A9;;;\n\
TEL;CELL:+34 600 000 000\n\
NOTE;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:Caf=C3=A9 con leche\n\
END:VCARD\n";

/// Apple-style grouped properties with a file preamble.
pub const VCF_GROUPED: &str = "\
Exported contacts\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
PRODID:-//Apple Inc.//iPhone OS 17.0//EN\n\
FN:Alex Kim\n\
item1.EMAIL;type=INTERNET;type=pref:alex@example.com\n\
item1.X-ABLabel:_$!<Other>!$_\n\
item2.TEL;type=CELL;type=VOICE:(555) 010-0200\n\
END:VCARD\n";

/// A card whose FN is a stringified missing value.
pub const VCF_NULL_FORMATTED_NAME: &str = "\
BEGIN:VCARD\n\
FN:null\n\
N:Park;Min;;;\n\
END:VCARD\n";

/// A card with a name and nothing else.
pub const VCF_NAME_ONLY: &str = "\
BEGIN:VCARD\n\
FN:Just A Name\n\
END:VCARD\n";
